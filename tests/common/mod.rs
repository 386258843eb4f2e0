//! Scripted stand-ins for the interactive and external collaborators.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;
use ts_scaffold::api::{AccountLookup, NameRegistry};
use ts_scaffold::install::Installer;
use ts_scaffold::models::GitIdentity;
use ts_scaffold::prefs::PreferenceStore;
use ts_scaffold::{Collaborators, Error, GeneratorConfig, Prompter, Question, Result, RunSummary};

/// One scripted reply to a text question.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Blank input: take the default.
    Default,
    Text(&'static str),
    Cancel,
}

/// Replays answers in order and records every question it was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    confirms: VecDeque<bool>,
    pub asked: Vec<Question>,
    pub confirmed: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn with_confirms(mut self, confirms: impl IntoIterator<Item = bool>) -> Self {
        self.confirms = confirms.into_iter().collect();
        self
    }

    pub fn asked_names(&self) -> Vec<&'static str> {
        self.asked.iter().map(|q| q.name).collect()
    }

    pub fn question(&self, name: &str) -> Option<&Question> {
        self.asked.iter().find(|q| q.name == name)
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn ask(&mut self, question: &Question) -> Result<String> {
        self.asked.push(question.clone());
        let reply = self
            .replies
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply for {}", question.name));
        match reply {
            Reply::Default => Ok(question.default.clone().unwrap_or_default()),
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Cancel => Err(Error::Cancelled),
        }
    }

    async fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        self.confirmed.push(message.to_string());
        Ok(self.confirms.pop_front().unwrap_or(default))
    }
}

/// GitHub lookup that either resolves to a fixed login or fails.
pub struct StubLookup {
    login: Option<&'static str>,
    pub emails: Mutex<Vec<String>>,
}

impl StubLookup {
    pub fn resolving(login: &'static str) -> Self {
        Self {
            login: Some(login),
            emails: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            login: None,
            emails: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.emails.lock().unwrap().len()
    }
}

#[async_trait]
impl AccountLookup for StubLookup {
    async fn github_username(&self, email: &str) -> Result<String> {
        self.emails.lock().unwrap().push(email.to_string());
        self.login
            .map(str::to_string)
            .ok_or_else(|| Error::Lookup("not found".to_string()))
    }
}

/// Registry where only the listed names are taken.
#[derive(Default)]
pub struct StubRegistry {
    pub taken: Vec<&'static str>,
}

#[async_trait]
impl NameRegistry for StubRegistry {
    async fn is_available(&self, name: &str) -> Result<bool> {
        Ok(!self.taken.contains(&name))
    }
}

#[derive(Default)]
pub struct RecordingInstaller {
    pub runs: Mutex<Vec<PathBuf>>,
}

impl RecordingInstaller {
    pub fn calls(&self) -> usize {
        self.runs.lock().unwrap().len()
    }
}

#[async_trait]
impl Installer for RecordingInstaller {
    async fn install(&self, destination: &Path) -> Result<()> {
        self.runs.lock().unwrap().push(destination.to_path_buf());
        Ok(())
    }
}

/// Scratch project directory plus a separate preference file.
pub struct Fixture {
    pub project: TempDir,
    pub home: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            project: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
        }
    }

    pub fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new(self.project.path());
        config.default_name = "demo".to_string();
        config.git_user = GitIdentity {
            name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
        };
        config
    }

    pub fn prefs(&self) -> PreferenceStore {
        PreferenceStore::load(self.home.path().join("preferences.json"))
    }

    pub fn descriptor(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.project.path().join("package.json")).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    pub fn write_descriptor(&self, value: serde_json::Value) {
        std::fs::write(
            self.project.path().join("package.json"),
            serde_json::to_string_pretty(&value).unwrap(),
        )
        .unwrap();
    }
}

/// Runs the whole pipeline against scripted collaborators.
pub async fn run_with(
    config: &GeneratorConfig,
    prompter: &mut ScriptedPrompter,
    lookup: &StubLookup,
    registry: &StubRegistry,
    installer: &RecordingInstaller,
    prefs: &mut PreferenceStore,
) -> Result<RunSummary> {
    ts_scaffold::run(
        config,
        Collaborators {
            prompter,
            lookup,
            registry,
            installer,
            prefs,
        },
    )
    .await
}
