//! Local HTTPS server signed by the test trust anchor

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;
use tokio_rustls::rustls::ServerConfig;
use tokio_rustls::rustls::crypto::aws_lc_rs;
use tokio_rustls::rustls::pki_types::pem::PemObject;
use tokio_rustls::rustls::pki_types::{CertificateDer, PrivateKeyDer};

/// CA certificate that signed the server certificate
pub const ANCHOR_PEM: &[u8] = include_bytes!("../../src/version/testdata/anchor.pem");

const SERVER_CERT_PEM: &[u8] = include_bytes!("../../src/version/testdata/localhost.pem");
const SERVER_KEY_PEM: &[u8] = include_bytes!("../../src/version/testdata/localhost.key");

/// Serves `body` with `200 OK` to every request until the test ends.
///
/// The certificate is valid for `localhost` and `127.0.0.1` and chains only to
/// [`ANCHOR_PEM`], so clients must trust that anchor to connect.
pub async fn serve_https(body: &'static str) -> SocketAddr {
    let certs = vec![CertificateDer::from_pem_slice(SERVER_CERT_PEM).unwrap()];
    let key = PrivateKeyDer::from_pem_slice(SERVER_KEY_PEM).unwrap();

    let config = ServerConfig::builder_with_provider(Arc::new(aws_lc_rs::default_provider()))
        .with_safe_default_protocol_versions()
        .unwrap()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .unwrap();
    let acceptor = TlsAcceptor::from(Arc::new(config));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                return;
            };
            let acceptor = acceptor.clone();

            tokio::spawn(async move {
                // Handshake fails when the client does not trust the anchor
                let Ok(mut tls) = acceptor.accept(stream).await else {
                    return;
                };

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match tls.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: text/plain\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = tls.write_all(response.as_bytes()).await;
                let _ = tls.shutdown().await;
            });
        }
    });

    addr
}
