use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// RFC 3339 timestamp of the build, set by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("content file is not valid UTF-8: {0}")]
    Encoding(String),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub skills: Vec<String>,
    pub email: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub company: String,
    pub role: String,
    pub period: String,
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

fn load<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let data = Assets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
    let text = std::str::from_utf8(&data.data)
        .map_err(|_| ContentError::Encoding(file.to_string()))?;
    parse(file, text)
}

fn parse<T: DeserializeOwned>(file: &str, text: &str) -> Result<T, ContentError> {
    serde_json::from_str(text).map_err(|e| ContentError::Parse {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

pub fn profile() -> Result<Profile, ContentError> {
    load("profile.json")
}

pub fn projects() -> Result<Vec<Project>, ContentError> {
    load("projects.json")
}

pub fn jobs() -> Result<Vec<Job>, ContentError> {
    load("experience.json")
}
