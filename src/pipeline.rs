//! The generator run as an explicit sequence of stages.
//!
//! `initializing` → name → general → GitHub → descriptor + templates → install.
//! Stages never read the working directory or git identity themselves; both
//! arrive through [`GeneratorConfig`].

use std::path::{Path, PathBuf};

use tracing::info;

use crate::api::{AccountLookup, NameRegistry};
use crate::error::Result;
use crate::install::Installer;
use crate::loader;
use crate::models::{CollectedProps, DESCRIPTOR_FILE, GitIdentity, ProjectDescriptor};
use crate::prefs::PreferenceStore;
use crate::prompt::{self, Prompter};
use crate::templates;
use crate::writer;

/// Inputs resolved before the run starts.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Directory the project is generated into.
    pub destination: PathBuf,
    /// Suggested module name, normally the destination's basename.
    pub default_name: String,
    pub git_user: GitIdentity,
    /// Pre-supplied GitHub account; skips lookup and prompt.
    pub github_account: Option<String>,
    pub skip_install: bool,
}

impl GeneratorConfig {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        let destination = destination.into();
        let default_name = basename(&destination);
        Self {
            destination,
            default_name,
            ..Default::default()
        }
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.destination.join(DESCRIPTOR_FILE)
    }
}

/// State threaded through the stages.
#[derive(Debug, Clone, Default)]
pub struct GeneratorState {
    /// Descriptor snapshot taken at start; the writer reads the file again.
    pub descriptor: ProjectDescriptor,
    pub props: CollectedProps,
}

/// External collaborators the stages talk to.
pub struct Collaborators<'a> {
    pub prompter: &'a mut dyn Prompter,
    pub lookup: &'a dyn AccountLookup,
    pub registry: &'a dyn NameRegistry,
    pub installer: &'a dyn Installer,
    pub prefs: &'a mut PreferenceStore,
}

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub props: CollectedProps,
    pub descriptor: PathBuf,
    pub templates: Vec<PathBuf>,
    pub installed: bool,
}

/// Loads the descriptor and seeds props from it.
pub fn initializing(config: &GeneratorConfig) -> Result<GeneratorState> {
    let descriptor = loader::load_descriptor(&config.descriptor_path())?;
    let props = loader::seed_props(&descriptor);
    Ok(GeneratorState { descriptor, props })
}

/// Persists the descriptor, then the templates.
pub fn writing(state: &GeneratorState, config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    writer::write_descriptor(&config.descriptor_path(), &state.props)?;
    templates::materialize(&config.destination)
}

pub async fn installing(config: &GeneratorConfig, installer: &dyn Installer) -> Result<bool> {
    if config.skip_install {
        info!("Skipping dependency installation");
        return Ok(false);
    }
    installer.install(&config.destination).await?;
    Ok(true)
}

/// Runs every stage in order. A cancelled prompt stops the run before anything is written.
pub async fn run(config: &GeneratorConfig, ctx: Collaborators<'_>) -> Result<RunSummary> {
    let Collaborators {
        prompter,
        lookup,
        registry,
        installer,
        prefs,
    } = ctx;

    let state = initializing(config)?;
    let state = prompt::ask_for_module_name(state, config, &mut *prompter, registry).await?;
    let state = prompt::ask_for_general(state, config, &mut *prompter, prefs).await?;
    let state = prompt::ask_for_github_account(state, config, &mut *prompter, lookup).await?;

    let templates = writing(&state, config)?;
    let installed = installing(config, installer).await?;

    info!(
        name = state.props.name.as_deref().unwrap_or_default(),
        github = state.props.github_account.as_deref().unwrap_or_default(),
        "Project scaffolded"
    );

    Ok(RunSummary {
        props: state.props,
        descriptor: config.descriptor_path(),
        templates,
        installed,
    })
}

/// Basename of a directory, used as the default module name.
pub fn basename(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
