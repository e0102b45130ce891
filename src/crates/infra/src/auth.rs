use application::auth::{RequestCredential, RequestVerifier};
use application::error::AppError;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const SCHEME: &str = "HMAC";

/// Checks `Authorization: HMAC <hex>` headers, where the digest is the
/// lowercase hex HMAC-SHA256 over the lowercased `"<method> <path>"`.
#[derive(Debug, Clone)]
pub struct HmacRequestVerifier {
    secret: String,
}

impl HmacRequestVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
        }
    }

    fn mac_for(&self, method: &str, path: &str) -> Result<HmacSha256, AppError> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| AppError::Unauthorized(format!("Invalid key: {}", e)))?;
        let message = format!("{} {}", method, path).to_lowercase();
        mac.update(message.as_bytes());
        Ok(mac)
    }

    /// Hex digest a client has to send for `method` on `path`.
    pub fn sign(&self, method: &str, path: &str) -> Result<String, AppError> {
        let mac = self.mac_for(method, path)?;
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Full header value, `HMAC <hex>`.
    pub fn authorization_header(&self, method: &str, path: &str) -> Result<String, AppError> {
        Ok(format!("{} {}", SCHEME, self.sign(method, path)?))
    }
}

impl RequestVerifier for HmacRequestVerifier {
    fn verify(&self, credential: &RequestCredential) -> Result<(), AppError> {
        let header = match credential.authorization.as_deref() {
            Some(h) if !h.is_empty() => h,
            _ => return Err(AppError::Unauthenticated("Unauthorized".to_string())),
        };

        if header.get(..SCHEME.len()) != Some(SCHEME) {
            return Err(AppError::Unauthorized(
                "Wrong authorization method.".to_string(),
            ));
        }

        let wrong_hash = || AppError::Unauthorized("Wrong hash.".to_string());
        let digest = header.get(SCHEME.len() + 1..).unwrap_or_default();
        // 摘要按文本比较：只接受 hex::encode 产生的小写形式
        if !digest.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(wrong_hash());
        }
        let provided = hex::decode(digest).map_err(|_| wrong_hash())?;
        self.mac_for(&credential.method, &credential.path)?
            .verify_slice(&provided)
            .map_err(|_| wrong_hash())
    }
}
