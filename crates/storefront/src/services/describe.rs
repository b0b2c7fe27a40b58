//! Gemini client for product description generation.
//!
//! The admin form can ask for a short promotional description of a product
//! name. This is the one asynchronous, fallible collaborator in the system
//! and it is strictly best-effort: a missing key or a failed call resolves
//! to a fixed fallback string, never to an error the caller has to handle.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Gemini model used for description generation.
const MODEL: &str = "gemini-2.0-flash";

/// Gemini API base URL.
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Returned when no API key is configured.
const NO_KEY_FALLBACK: &str = "Descripción no disponible (Falta API Key).";

/// Returned when the call fails or the response is unusable.
const ERROR_FALLBACK: &str =
    "Producto fresco y de excelente calidad, seleccionado especialmente para ti.";

/// Description-generation client.
#[derive(Clone)]
pub struct DescribeClient {
    client: reqwest::Client,
    api_key: Option<SecretString>,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl DescribeClient {
    /// Create a new client. A `None` key disables generation entirely.
    #[must_use]
    pub fn new(api_key: Option<SecretString>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Generate a short promotional description for a product name.
    ///
    /// Always resolves to a usable string: real generated text when the
    /// collaborator cooperates, a fixed fallback otherwise. No retry.
    pub async fn generate(&self, product_name: &str) -> String {
        let Some(api_key) = self.api_key.as_ref() else {
            tracing::warn!("GEMINI_API_KEY not set, skipping description generation");
            return NO_KEY_FALLBACK.to_owned();
        };

        match self.request(api_key, product_name).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Description generation failed: {e}");
                ERROR_FALLBACK.to_owned()
            }
        }
    }

    async fn request(
        &self,
        api_key: &SecretString,
        product_name: &str,
    ) -> Result<String, reqwest::Error> {
        let prompt = format!(
            "Escribe una descripción corta, atractiva y vendedora (máximo 2 frases) \
             para un producto de feria vecinal llamado: \"{product_name}\". \
             El tono debe ser amable, como de una abuela o un vendedor de confianza. \
             Resalta la frescura o calidad."
        );

        let url = format!("{BASE_URL}/{MODEL}:generateContent");
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: GenerateResponse = response.json().await?;
        let text = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text.trim().to_owned())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| ERROR_FALLBACK.to_owned());

        Ok(text)
    }
}
