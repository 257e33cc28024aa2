use serde::Deserialize;

pub static DEFAULT_GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

fn default_app_env() -> String {
    "development".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub database_url: String,

    pub jwt_secret: String,
    pub payment_cipher_key: String,

    pub google_userinfo_url: Option<String>,
}

impl Envy {
    pub fn google_userinfo_url(&self) -> &str {
        match &self.google_userinfo_url {
            Some(url) => url,
            None => DEFAULT_GOOGLE_USERINFO_URL,
        }
    }
}
