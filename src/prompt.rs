//! Interactive question phases: module name, general metadata, GitHub account.
//!
//! Phases run strictly in that order and each one finishes, including any
//! network lookup, before the next begins. Every phase takes the generator
//! state by value and hands it back updated.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::api::{AccountLookup, NameRegistry};
use crate::error::Result;
use crate::naming::kebab_case;
use crate::pipeline::{GeneratorConfig, GeneratorState};
use crate::prefs::PreferenceStore;

const NAME_TAKEN: &str = "The name above already exists on npm, choose another?";
const NAME_REQUIRED: &str = "Module name cannot be empty";

/// One question put to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: &'static str,
    pub message: &'static str,
    pub default: Option<String>,
    /// Validation message from the previous attempt, if it was rejected.
    pub error: Option<String>,
}

impl Question {
    pub fn new(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            message,
            default: None,
            error: None,
        }
    }

    pub fn with_default(mut self, default: Option<String>) -> Self {
        self.default = default.filter(|d| !d.is_empty());
        self
    }
}

/// Source of answers. Implementations return [`crate::Error::Cancelled`] when the user aborts.
#[async_trait]
pub trait Prompter: Send {
    /// Returns the typed answer, or the question's default (else `""`) for blank input.
    async fn ask(&mut self, question: &Question) -> Result<String>;

    async fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Asks for the module name until a non-empty kebab-case name is given.
///
/// The name is always asked, even when the descriptor already has one. A
/// name that is already published on npm triggers a confirm to pick another.
pub async fn ask_for_module_name(
    mut state: GeneratorState,
    config: &GeneratorConfig,
    prompter: &mut dyn Prompter,
    registry: &dyn NameRegistry,
) -> Result<GeneratorState> {
    let name = loop {
        let name = ask_name(prompter, &config.default_name).await?;

        match registry.is_available(&name).await {
            Ok(true) => break name,
            Ok(false) => {
                if !prompter.confirm(NAME_TAKEN, true).await? {
                    break name;
                }
            }
            Err(e) => {
                debug!("Skipping npm name check for {}: {}", name, e);
                break name;
            }
        }
    };

    info!(name = %name, "Module name set");
    state.props.name = Some(name);
    Ok(state)
}

async fn ask_name(prompter: &mut dyn Prompter, default_name: &str) -> Result<String> {
    let mut question =
        Question::new("name", "Module Name").with_default(Some(default_name.to_string()));

    loop {
        let answer = prompter.ask(&question).await?;
        let name = kebab_case(&answer);
        if !name.is_empty() {
            return Ok(name);
        }
        question.error = Some(NAME_REQUIRED.to_string());
    }
}

/// Asks the fixed list of metadata questions, skipping any already known.
///
/// Author answers are remembered in `prefs` and offered as defaults on later
/// runs ahead of the git identity.
pub async fn ask_for_general(
    mut state: GeneratorState,
    config: &GeneratorConfig,
    prompter: &mut dyn Prompter,
    prefs: &mut PreferenceStore,
) -> Result<GeneratorState> {
    let sticky = |key: &str, fallback: Option<&String>| {
        prefs
            .get(key)
            .map(str::to_string)
            .or_else(|| fallback.cloned())
    };

    let props = &state.props;
    let plan = [
        (
            props.description.is_none(),
            Question::new("description", "Description"),
            false,
        ),
        (
            props.homepage.is_none(),
            Question::new("homepage", "Project homepage url"),
            false,
        ),
        (
            props.author_name.is_none(),
            Question::new("authorName", "Author's Name")
                .with_default(sticky("authorName", config.git_user.name.as_ref())),
            true,
        ),
        (
            props.author_email.is_none(),
            Question::new("authorEmail", "Author's Email")
                .with_default(sticky("authorEmail", config.git_user.email.as_ref())),
            true,
        ),
        (
            props.author_url.is_none(),
            Question::new("authorUrl", "Author's Homepage")
                .with_default(sticky("authorUrl", None)),
            true,
        ),
        (
            state.descriptor.keywords.is_none(),
            Question::new("keywords", "Package keywords (comma to split)"),
            false,
        ),
    ];

    let mut answers = Vec::new();
    for (when, question, store) in plan {
        if !when {
            debug!(question = question.name, "Already known, skipping");
            continue;
        }
        let answer = prompter.ask(&question).await?;
        answers.push((question.name, answer.trim().to_string(), store));
    }

    for (key, answer, store) in answers {
        if store && !answer.is_empty() {
            prefs.set(key, &answer);
        }
        apply_answer(&mut state, key, answer);
    }
    prefs.save()?;

    Ok(state)
}

fn apply_answer(state: &mut GeneratorState, key: &str, answer: String) {
    if key == "keywords" {
        state.props.keywords = Some(split_keywords(&answer));
        return;
    }

    if answer.is_empty() {
        return;
    }
    let props = &mut state.props;
    let slot = match key {
        "description" => &mut props.description,
        "homepage" => &mut props.homepage,
        "authorName" => &mut props.author_name,
        "authorEmail" => &mut props.author_email,
        "authorUrl" => &mut props.author_url,
        _ => return,
    };
    *slot = Some(answer);
}

/// Splits comma separated keywords, trimming whitespace around each one.
pub fn split_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolves the GitHub account: the configured one, else a prompt seeded from a lookup.
pub async fn ask_for_github_account(
    mut state: GeneratorState,
    config: &GeneratorConfig,
    prompter: &mut dyn Prompter,
    lookup: &dyn AccountLookup,
) -> Result<GeneratorState> {
    if let Some(account) = &config.github_account {
        state.props.github_account = Some(account.clone());
        return Ok(state);
    }

    let email = state.props.author_email.clone().unwrap_or_default();
    let suggested = match lookup.github_username(&email).await {
        Ok(username) => username,
        Err(e) => {
            debug!("GitHub lookup failed: {}", e);
            String::new()
        }
    };

    let question = Question::new("githubAccount", "GitHub username or organization")
        .with_default(Some(suggested));
    let answer = prompter.ask(&question).await?;
    let answer = answer.trim();
    state.props.github_account = (!answer.is_empty()).then(|| answer.to_string());

    Ok(state)
}
