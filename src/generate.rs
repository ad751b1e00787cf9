use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info};

use crate::class::TargetClass;

/// Marker that must appear in the output folder path while safe mode is on
pub const SRC_GEN: &str = "src-gen";
pub const DEFAULT_SRC_GEN_FOLDER_BASE: &str = "src-gen/main/java";
pub const DEFAULT_CONSTANT_NAME: &str = "T";

/// Everything needed to turn one text file into one Java source file.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub input_file: PathBuf,
    pub src_gen_folder_base: PathBuf,
    pub package_name: String,
    pub class_name: String,
    pub constant_name: String,
    /// Refuse to write unless `src_gen_folder_base` contains `src-gen`
    pub safe_mode: bool,
}

impl GenerateRequest {
    pub fn new(
        input_file: impl Into<PathBuf>,
        package_name: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            input_file: input_file.into(),
            src_gen_folder_base: PathBuf::from(DEFAULT_SRC_GEN_FOLDER_BASE),
            package_name: package_name.into(),
            class_name: class_name.into(),
            constant_name: DEFAULT_CONSTANT_NAME.to_string(),
            safe_mode: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The Java file was written to this path
    Written(PathBuf),
    /// Nothing was written
    Skipped { reason: String },
}

fn package_separator() -> &'static Regex {
    static PACKAGE_SEPARATOR: OnceLock<Regex> = OnceLock::new();
    PACKAGE_SEPARATOR.get_or_init(|| Regex::new(r"[./\\]+").unwrap())
}

/// Folder for a package below `base`, e.g. `com.example` -> `base/com/example`
pub fn package_folder(base: &Path, package_name: &str) -> PathBuf {
    let mut folder = base.to_path_buf();
    for segment in package_separator()
        .split(package_name.trim())
        .filter(|s| !s.is_empty())
    {
        folder.push(segment);
    }
    folder
}

/// Read the input and render the Java text without touching the output folder.
pub fn render_only(request: &GenerateRequest) -> Result<String> {
    let (_, text) = prepare(request)?;
    Ok(text)
}

fn check_input_file(input_file: &Path) -> Result<()> {
    if !input_file.is_file() {
        anyhow::bail!(
            "'inputFile' does not point to a valid file : {}",
            input_file.display()
        );
    }
    Ok(())
}

fn prepare(request: &GenerateRequest) -> Result<(TargetClass, String)> {
    let input_file = &request.input_file;
    check_input_file(input_file)?;

    let target = TargetClass::new(Some(&request.package_name), &request.class_name)?;

    if request.constant_name.trim().is_empty() {
        anyhow::bail!("'constantName' must be non empty.");
    }

    let bytes = fs::read(input_file)
        .with_context(|| format!("Problem reading file : {}", input_file.display()))?;
    let content = String::from_utf8(bytes)
        .with_context(|| format!("Input file is not valid UTF-8 : {}", input_file.display()))?;
    debug!(
        input = %input_file.display(),
        bytes = content.len(),
        "read input file"
    );

    let text = target.render(Some(&request.constant_name), &content);
    Ok((target, text))
}

/// Generate the Java file described by `request`.
///
/// The output file is overwritten if it exists. Nothing is written unless
/// every check and the rendering succeeded.
pub fn generate(request: &GenerateRequest) -> Result<GenerateOutcome> {
    let base = &request.src_gen_folder_base;

    check_input_file(&request.input_file)?;

    if !base.is_dir() {
        anyhow::bail!(
            "'srcGenFolderBase' does not point to a valid folder : {}",
            base.display()
        );
    }

    let canonical_base = fs::canonicalize(base)
        .with_context(|| format!("Could not calculate canonical path for : {}", base.display()))?;

    if request.safe_mode && !canonical_base.to_string_lossy().contains(SRC_GEN) {
        let reason = format!(
            "Skipping code generation as safeMode is enabled, and 'srcGenFolderBase' does not contain '{SRC_GEN}' in the path."
        );
        info!(base = %canonical_base.display(), "{reason}");
        return Ok(GenerateOutcome::Skipped { reason });
    }

    let (target, text) = prepare(request)?;

    let folder = package_folder(base, target.package_name().unwrap_or_default());
    if !folder.exists() {
        debug!(folder = %folder.display(), "creating package folder");
        fs::create_dir_all(&folder)
            .with_context(|| format!("Could not create folder : {}", folder.display()))?;
    }

    if !folder.is_dir() {
        anyhow::bail!(
            "Trying to create folder but file already exists with path : {}",
            folder.display()
        );
    }

    let output_file = folder.join(target.file_name());
    fs::write(&output_file, text.as_bytes())
        .with_context(|| format!("Problem generating .java file : {}", output_file.display()))?;

    info!(output = %output_file.display(), "generated java source");
    Ok(GenerateOutcome::Written(output_file))
}
