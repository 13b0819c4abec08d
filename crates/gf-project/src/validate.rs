//! Project validation logic.

use gf_core::numeric::ensure_strictly_increasing;
use gf_field::{FieldError, validate_field, validate_segment_count};

use crate::schema::Project;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Field error: {0}")]
    Field(#[from] FieldError),
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    validate_field(&project.boreholes())?;
    validate_segment_count(project.gfunction.n_segments)?;

    let alpha = project.ground.alpha_m2ps;
    if !alpha.is_finite() || alpha <= 0.0 {
        return Err(invalid("ground.alpha_m2ps", alpha, "must be positive"));
    }

    let time = project.time();
    let Some(&first) = time.first() else {
        return Err(invalid("gfunction.time_s", "[]", "at least one time required"));
    };
    ensure_strictly_increasing(time, "gfunction.time_s")
        .map_err(|e| invalid("gfunction.time_s", format!("{time:?}"), &e.to_string()))?;
    if first <= 0.0 {
        return Err(invalid("gfunction.time_s[0]", first, "must be positive"));
    }

    if project.response.table.trim().is_empty() {
        return Err(invalid("response.table", "\"\"", "path required"));
    }

    Ok(())
}
