//! Page content: the records each section iterates over.
//!
//! Content is fixed for the lifetime of the app. It comes either from the
//! built-in [`PortfolioContent::builtin`] set or from a TOML file with the
//! same shape, and is validated once on load.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialRecord {
    pub quote: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub avatar: String,
}

impl TestimonialRecord {
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn role_or_empty(&self) -> &str {
        self.role.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Wordmark shown in the navigation bar.
    pub brand: String,
    pub headline_roles: Vec<String>,
    pub about: String,
    pub call_to_action: String,
}

impl Profile {
    pub fn headline(&self) -> String {
        self.headline_roles.join(" • ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub date: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn heading(&self) -> String {
        format!("{} at {}", self.role, self.company)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub title: String,
    pub school: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl EducationEntry {
    pub fn subtitle(&self) -> String {
        format!("{} ({})", self.school, self.duration)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub pitch: String,
    /// `mailto:` link.
    pub email: String,
    /// Messaging deep link (WhatsApp).
    pub messaging: String,
    pub github: String,
    pub linkedin: String,
}

/// Record shown by the "More Info" overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalDetail {
    Experience(ExperienceEntry),
    Education(EducationEntry),
}

impl ModalDetail {
    pub fn title(&self) -> String {
        match self {
            ModalDetail::Experience(entry) => entry.heading(),
            ModalDetail::Education(entry) => entry.title.clone(),
        }
    }

    /// Experience description, or the education note; empty when absent.
    pub fn body(&self) -> &str {
        match self {
            ModalDetail::Experience(entry) => &entry.description,
            ModalDetail::Education(entry) => entry.note.as_deref().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    /// Window title.
    pub title: String,
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub testimonials: Vec<TestimonialRecord>,
    pub contact: ContactInfo,
}

impl PortfolioContent {
    pub fn from_toml_str(raw: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_toml_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            projects = content.projects.len(),
            testimonials = content.testimonials.len(),
            "loaded portfolio content"
        );
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::MissingField("profile.name"));
        }
        if self.testimonials.is_empty() {
            return Err(ContentError::EmptyCarousel);
        }
        validate_link("contact.email", &self.contact.email, &["mailto"])?;
        validate_link("contact.messaging", &self.contact.messaging, &["https"])?;
        validate_link("contact.github", &self.contact.github, &["https"])?;
        validate_link("contact.linkedin", &self.contact.linkedin, &["https"])?;
        Ok(())
    }

    pub fn builtin() -> Self {
        Self {
            title: "Manali | Blockchain Developer Portfolio".into(),
            profile: Profile {
                name: "Manali".into(),
                brand: "Manali Dev".into(),
                headline_roles: vec![
                    "Blockchain Developer".into(),
                    "React Enthusiast".into(),
                    "Python Coder".into(),
                ],
                about: "I'm a passionate Blockchain Developer with experience in building \
                        decentralized applications, smart contracts, and working with various \
                        blockchain networks. I specialize in creating efficient and scalable \
                        solutions in both backend and frontend. Always exploring new challenges \
                        and collaborations."
                    .into(),
                call_to_action: "Let's Work Together".into(),
            },
            projects: vec![
                project("NFT Marketplace", "Mint and trade NFTs with IPFS + Ethereum.", &["React", "Solidity"]),
                project("DeFi Lending", "Lending protocol with smart contracts.", &["Solidity", "Web3.js"]),
                project("Crypto Wallet", "Secure wallet for multiple chains.", &["Next.js", "Ethers.js"]),
                project("DAO Governance", "Voting app for decentralized orgs.", &["React", "Smart Contracts"]),
                project("Supply Chain DApp", "Blockchain product traceability.", &["IPFS", "Truffle"]),
                project("Auction NAPA", "Launch auction page securely.", &["Polygon", "Tailwind"]),
            ],
            experience: vec![
                ExperienceEntry {
                    company: "Freelancer".into(),
                    role: "Blockchain Developer".into(),
                    date: "Jan 2024 – Present".into(),
                    description: "Smart contract deployments on Ethereum & Polygon, DeFi & NFT integrations.".into(),
                },
                ExperienceEntry {
                    company: "Virtual Height IT Services".into(),
                    role: "Blockchain Developer".into(),
                    date: "Dec 2021 – Dec 2023".into(),
                    description: "Built a metaverse platform, audited contracts, and led junior dev team.".into(),
                },
                ExperienceEntry {
                    company: "Sharvaya Infotech".into(),
                    role: ".NET Developer".into(),
                    date: "Jul 2021 – Dec 2021".into(),
                    description: "Developed SQL-based C# projects with client delivery success.".into(),
                },
            ],
            education: vec![
                EducationEntry {
                    title: "Masters in Computer Engineering".into(),
                    school: "Ahmedabad Institute of Technology".into(),
                    duration: "2024–2026".into(),
                    note: Some("Pursuing".into()),
                },
                EducationEntry {
                    title: "Bachelor of Engineering in Computer".into(),
                    school: "Silver Oak College of Technology".into(),
                    duration: "2018–2021".into(),
                    note: Some("Graduated with a CGPA of 9.63".into()),
                },
                EducationEntry {
                    title: "Diploma in Computer Engineering".into(),
                    school: "Shree Swaminarayan Polytechnic".into(),
                    duration: "2015–2018".into(),
                    note: None,
                },
                EducationEntry {
                    title: "Secondary School Certificate (SSC)".into(),
                    school: "Gyandeep Vidyalaya".into(),
                    duration: "2014".into(),
                    note: None,
                },
            ],
            testimonials: vec![
                TestimonialRecord {
                    quote: "Delivered our DEX project faster than expected. The contract logic was \
                            flawless and secure, and the audit found vulnerabilities no other audit \
                            had caught."
                        .into(),
                    name: Some("Meta1Zero".into()),
                    role: None,
                    avatar: "🧑‍💻".into(),
                },
                TestimonialRecord {
                    quote: "UI/UX and smart contract integration was seamless. I've worked with many \
                            devs and she stands out."
                        .into(),
                    name: Some("XGRAFT".into()),
                    role: Some("CEO, XGRAFT".into()),
                    avatar: "👨‍🚀".into(),
                },
                TestimonialRecord {
                    quote: "Great communication, deep blockchain knowledge, and consistent delivery. \
                            Would 100% recommend."
                        .into(),
                    name: None,
                    role: Some(String::new()),
                    avatar: "👩‍💼".into(),
                },
            ],
            contact: ContactInfo {
                pitch: "Open to freelance, collaborations, and contract work.".into(),
                email: "mailto:hello@example.com".into(),
                messaging: "https://wa.me/yournumber".into(),
                github: "https://github.com/Manali198".into(),
                linkedin: "https://www.linkedin.com/in/manali-trivedi-8928151a8/".into(),
            },
        }
    }
}

fn project(title: &str, description: &str, stack: &[&str]) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        stack: stack.iter().map(|s| s.to_string()).collect(),
    }
}

fn validate_link(field: &'static str, value: &str, schemes: &[&str]) -> Result<(), ContentError> {
    let invalid = || ContentError::InvalidLink {
        field,
        value: value.to_string(),
    };
    let parsed = url::Url::parse(value).map_err(|_| invalid())?;
    if schemes.contains(&parsed.scheme()) {
        Ok(())
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
