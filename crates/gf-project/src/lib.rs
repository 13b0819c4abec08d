//! gf-project: project file format, validation and response table loading.

pub mod schema;
pub mod validate;

use std::path::{Path, PathBuf};

use gf_response::{ResponseError, ResponseTensor, TabulatedResponse};

pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_project};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Response table error: {0}")]
    Response(#[from] ResponseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn from_yaml_str(content: &str) -> ProjectResult<Project> {
    let project: Project = serde_yaml::from_str(content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn load_yaml(path: &Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn load_json(path: &Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    let project: Project = serde_json::from_str(&content)?;
    validate_project(&project)?;
    Ok(project)
}

/// Load a project by extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &Path) -> ProjectResult<Project> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}

/// Path of the project's response table, resolved against the directory of
/// the project file.
pub fn response_table_path(project_path: &Path, project: &Project) -> PathBuf {
    let table = Path::new(&project.response.table);
    match project_path.parent() {
        Some(dir) if table.is_relative() => dir.join(table),
        _ => table.to_path_buf(),
    }
}

/// Read the project's response table and check it against the field.
///
/// The table must cover the discretized field (`n_boreholes * n_segments`
/// sources) on exactly the project's reporting times.
pub fn load_response_table(project_path: &Path, project: &Project) -> ProjectResult<TabulatedResponse> {
    let path = response_table_path(project_path, project);
    tracing::debug!(path = %path.display(), "loading response table");
    let content = std::fs::read_to_string(&path)?;
    let def: ResponseTableDef = serde_json::from_str(&content)?;
    let table = tabulate(def)?;

    let n_sources = project.field.boreholes.len() * project.gfunction.n_segments;
    if table.n_sources() != n_sources {
        return Err(ResponseError::ShapeMismatch {
            expected: [n_sources, n_sources, project.time().len() + 1],
            actual: table.tensor().shape(),
        }
        .into());
    }
    Ok(table)
}

/// Flatten a nested `h[i][j][k]` table into a checked tabulated response.
pub fn tabulate(def: ResponseTableDef) -> ProjectResult<TabulatedResponse> {
    let n = def.h.len();
    let n_k = def.time_s.len() + 1;
    let mut data = Vec::with_capacity(n * n * n_k);
    for (i, row) in def.h.iter().enumerate() {
        if row.len() != n {
            return Err(ValidationError::InvalidValue {
                field: format!("h[{i}]"),
                value: format!("{} series", row.len()),
                reason: format!("expected {n}"),
            }
            .into());
        }
        for (j, series) in row.iter().enumerate() {
            if series.len() != n_k {
                return Err(ValidationError::InvalidValue {
                    field: format!("h[{i}][{j}]"),
                    value: format!("{} samples", series.len()),
                    reason: format!("expected {n_k} (t = 0 plus every time_s)"),
                }
                .into());
            }
            data.extend_from_slice(series);
        }
    }
    let h = ResponseTensor::from_vec(n, n_k, data)?;
    Ok(TabulatedResponse::new(def.time_s, h)?)
}
