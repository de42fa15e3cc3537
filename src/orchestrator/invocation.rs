//! Annotator command line construction
//!
//! Flags are emitted in a fixed order and each value directly follows its
//! flag. Nothing is validated here: flag interactions are the annotator's
//! concern.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::settings::AnnotatorSettings;

const FLAG_JAR: &str = "-jar";
const FLAG_DIR: &str = "-d";
const FLAG_BUILD_COMMAND: &str = "-bc";
const FLAG_CONFIG_PATHS: &str = "-cp";
const FLAG_INITIALIZER: &str = "-i";
const FLAG_NULLABLE: &str = "-n";
const FLAG_CHECKER_NAME: &str = "-cn";
const FLAG_DISABLE_FIX_CACHE: &str = "-dfc";
const FLAG_DISABLE_CACHE: &str = "-dc";
const FLAG_DEPTH: &str = "--depth";
const FLAG_REDIRECT_BUILD_OUTPUT: &str = "-rboserr";
const FLAG_DISABLE_PARALLEL: &str = "-dpp";

/// A fully described process launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    pub env: BTreeMap<String, String>,
}

impl Invocation {
    /// Human-readable command line, for logs and `--print-command`
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(quote_arg)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote_arg(arg: &str) -> String {
    if !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@+,".contains(c))
    {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Build the annotator launch from resolved settings
pub fn build_invocation(settings: &AnnotatorSettings) -> Invocation {
    let mut args: Vec<String> = Vec::new();
    let mut push = |flag: &str, value: Option<String>| {
        args.push(flag.to_string());
        if let Some(value) = value {
            args.push(value);
        }
    };

    push(FLAG_JAR, Some(settings.tool_path.display().to_string()));
    push(FLAG_DIR, Some(settings.workspace_dir.display().to_string()));
    push(FLAG_BUILD_COMMAND, Some(settings.build_command.clone()));
    push(
        FLAG_CONFIG_PATHS,
        Some(settings.manifest_path.display().to_string()),
    );
    push(FLAG_INITIALIZER, Some(settings.initializer_annotation.clone()));
    push(FLAG_NULLABLE, Some(settings.nullable_annotation.clone()));
    if let Some(checker) = &settings.checker_name {
        push(FLAG_CHECKER_NAME, Some(checker.clone()));
    }
    if settings.flags.disable_fix_cache {
        push(FLAG_DISABLE_FIX_CACHE, None);
    }
    if settings.flags.disable_cache {
        push(FLAG_DISABLE_CACHE, None);
    }
    push(FLAG_DEPTH, Some(settings.depth.to_string()));
    if settings.flags.redirect_build_output {
        push(FLAG_REDIRECT_BUILD_OUTPUT, None);
    }
    if settings.flags.disable_parallel_processing {
        push(FLAG_DISABLE_PARALLEL, None);
    }

    Invocation {
        program: settings.java.clone(),
        args,
        working_dir: settings.working_dir.clone(),
        env: settings.env.clone(),
    }
}
