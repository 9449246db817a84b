use std::path::Path;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Identity;

use crate::config::HasteConfig;
use crate::error::HasteError;
use crate::files::FileSystem;

/// A finished HTTP exchange, reduced to plain data so the API layer can be
/// driven by an in-memory transport in tests.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, HasteError>;

    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, HasteError>;
}

/// `Transport` on top of a blocking reqwest client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds the HTTP client, attaching the client certificate when one is
    /// configured. Certificate problems abort here, before any request is
    /// made.
    pub fn from_config(fs: &dyn FileSystem, config: &HasteConfig) -> Result<Self, HasteError> {
        let client = match load_certificate_bundle(fs, config)? {
            Some(bundle) => {
                let identity = Identity::from_pem(&bundle).map_err(certificate_error)?;

                Client::builder()
                    .use_rustls_tls()
                    .identity(identity)
                    .build()
                    .map_err(certificate_error)?
            }
            None => Client::new(),
        };

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, HasteError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| transport_error(url, &e))?;

        read_response(url, response)
    }

    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, HasteError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .map_err(|e| transport_error(url, &e))?;

        read_response(url, response)
    }
}

// The body is consumed on every path, 404 included, so the connection is
// always released back in a clean state.
fn read_response(
    url: &str,
    response: reqwest::blocking::Response,
) -> Result<HttpResponse, HasteError> {
    let status = response.status().as_u16();
    let body = response
        .bytes()
        .map_err(|e| transport_error(url, &e))?
        .to_vec();

    Ok(HttpResponse { status, body })
}

/// Reads the configured certificate and key into a single PEM bundle, which
/// is the shape `Identity::from_pem` expects.
pub fn load_certificate_bundle(
    fs: &dyn FileSystem,
    config: &HasteConfig,
) -> Result<Option<Vec<u8>>, HasteError> {
    let (cert_path, key_path) = match config.client_certificate()? {
        Some(paths) => paths,
        None => return Ok(None),
    };

    let mut bundle = read_pem(fs, cert_path)?;
    if bundle.last() != Some(&b'\n') {
        bundle.push(b'\n');
    }
    bundle.extend(read_pem(fs, key_path)?);

    Ok(Some(bundle))
}

fn read_pem(fs: &dyn FileSystem, path: &Path) -> Result<Vec<u8>, HasteError> {
    fs.read(path).map_err(|e| HasteError::Certificate {
        reason: format!("{}: {}", path.display(), e),
    })
}

fn certificate_error(error: reqwest::Error) -> HasteError {
    HasteError::Certificate {
        reason: error.to_string(),
    }
}

fn transport_error(url: &str, error: &reqwest::Error) -> HasteError {
    HasteError::Transport {
        url: url.to_string(),
        reason: error.to_string(),
    }
}
