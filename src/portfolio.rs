//! The portfolio document and the stores that hand it out.

use crate::error::{Result, TerminalError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Free-form period label such as "2021-2023" or "2023-Present".
    pub year: String,
    pub title: String,
    pub company: String,
    #[serde(rename = "desc")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

/// The single content document behind both views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    pub name: String,
    pub tagline: String,
    pub about: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    pub contact: Contact,
}

impl PortfolioRecord {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The stock record shipped with the binary.
    pub fn sample() -> Self {
        Self {
            name: "Akshay".to_string(),
            tagline: "Full-stack developer passionate about open-source and creative projects."
                .to_string(),
            about: "I'm a software engineer with a passion for building beautiful and functional \
                    web applications. I have experience with the full stack, from crafting user \
                    interfaces with React and TypeScript to building scalable backends with \
                    Node.js and Convex. I'm always looking for new challenges and opportunities \
                    to learn."
                .to_string(),
            skills: [
                "TypeScript",
                "React",
                "Node.js",
                "Convex",
                "TailwindCSS",
                "Figma",
                "Next.js",
                "Python",
            ]
            .map(String::from)
            .to_vec(),
            projects: vec![
                Project {
                    name: "Project One".to_string(),
                    description: "A very cool project that does amazing things. Built with the \
                                  latest technologies to solve a real-world problem."
                        .to_string(),
                    url: "https://github.com".to_string(),
                    tech: ["React", "Convex", "TailwindCSS"].map(String::from).to_vec(),
                    image: Some("https://picsum.photos/seed/project1/400/300".to_string()),
                },
                Project {
                    name: "Project Two".to_string(),
                    description: "Another awesome project that showcases my skills in backend \
                                  development and system design."
                        .to_string(),
                    url: "https://github.com".to_string(),
                    tech: ["Node.js", "TypeScript", "PostgreSQL"].map(String::from).to_vec(),
                    image: Some("https://picsum.photos/seed/project2/400/300".to_string()),
                },
                Project {
                    name: "Project Three".to_string(),
                    description: "A mobile app that helps you stay organized and productive. \
                                  Available on both iOS and Android."
                        .to_string(),
                    url: "https://github.com".to_string(),
                    tech: ["React Native", "Firebase"].map(String::from).to_vec(),
                    image: Some("https://picsum.photos/seed/project3/400/300".to_string()),
                },
            ],
            experience: vec![
                Experience {
                    year: "2023-Present".to_string(),
                    title: "Software Engineer".to_string(),
                    company: "Tech Giant Inc.".to_string(),
                    description: "Working on the core infrastructure team, improving performance \
                                  and reliability of the main product."
                        .to_string(),
                },
                Experience {
                    year: "2021-2023".to_string(),
                    title: "Junior Developer".to_string(),
                    company: "Startup Co.".to_string(),
                    description: "Helped build the company's first product from scratch. Wore \
                                  many hats and learned a ton."
                        .to_string(),
                },
            ],
            contact: Contact {
                email: "akshay@example.com".to_string(),
                github: "https://github.com".to_string(),
                linkedin: "https://linkedin.com/in/".to_string(),
            },
        }
    }
}

/// Read access to the portfolio document.
///
/// `None` means the document is not available yet; views show a loading
/// state and ask again later.
pub trait ContentStore: Send + Sync {
    fn get(&self) -> Option<Arc<PortfolioRecord>>;
}

/// A store holding a record in memory, or nothing at all.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<Arc<PortfolioRecord>>,
}

impl MemoryStore {
    pub fn new(record: PortfolioRecord) -> Self {
        Self {
            record: Some(Arc::new(record)),
        }
    }

    /// A store whose record never arrives.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl ContentStore for MemoryStore {
    fn get(&self) -> Option<Arc<PortfolioRecord>> {
        self.record.clone()
    }
}

/// A store reading a JSON document from disk on every fetch.
///
/// A missing or malformed file reads as "not available yet".
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the document, reporting why it failed.
    pub fn load(&self) -> Result<PortfolioRecord> {
        let text =
            std::fs::read_to_string(&self.path).map_err(|e| TerminalError::io(&self.path, e))?;
        PortfolioRecord::from_json(&text)
    }
}

impl ContentStore for JsonFileStore {
    fn get(&self) -> Option<Arc<PortfolioRecord>> {
        match self.load() {
            Ok(record) => {
                debug!(path = %self.path.display(), "portfolio loaded");
                Some(Arc::new(record))
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "portfolio unavailable");
                None
            }
        }
    }
}
