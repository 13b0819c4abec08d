//! Project schema definitions.

use serde::{Deserialize, Serialize};

use gf_core::units::{Diffusivity, m, m2ps};
use gf_field::Borehole;
use gf_solver::GFunctionOptions;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    pub field: FieldDef,
    pub ground: GroundDef,
    pub gfunction: GFunctionDef,
    pub response: ResponseDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDef {
    #[serde(default)]
    pub boreholes: Vec<BoreholeDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoreholeDef {
    pub h_m: f64,
    pub d_m: f64,
    pub r_b_m: f64,
    pub x_m: f64,
    pub y_m: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GroundDef {
    pub alpha_m2ps: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GFunctionDef {
    #[serde(default = "default_n_segments")]
    pub n_segments: usize,
    #[serde(default = "default_true")]
    pub use_similarities: bool,
    #[serde(default)]
    pub verbose: bool,
    pub time_s: Vec<f64>,
}

/// Where the segment response factors come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseDef {
    /// JSON response table, relative to the project file
    pub table: String,
}

/// On-disk response table: `h[i][j][k]` over `[0, time_s...]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseTableDef {
    pub time_s: Vec<f64>,
    pub h: Vec<Vec<Vec<f64>>>,
}

fn default_n_segments() -> usize {
    12
}

fn default_true() -> bool {
    true
}

impl From<&BoreholeDef> for Borehole {
    fn from(def: &BoreholeDef) -> Self {
        Borehole::new(m(def.h_m), m(def.d_m), m(def.r_b_m), m(def.x_m), m(def.y_m))
    }
}

impl From<&GFunctionDef> for GFunctionOptions {
    fn from(def: &GFunctionDef) -> Self {
        GFunctionOptions {
            n_segments: def.n_segments,
            use_similarities: def.use_similarities,
            verbose: def.verbose,
        }
    }
}

impl Project {
    pub fn boreholes(&self) -> Vec<Borehole> {
        self.field.boreholes.iter().map(Borehole::from).collect()
    }

    pub fn alpha(&self) -> Diffusivity {
        m2ps(self.ground.alpha_m2ps)
    }

    pub fn options(&self) -> GFunctionOptions {
        GFunctionOptions::from(&self.gfunction)
    }

    pub fn time(&self) -> &[f64] {
        &self.gfunction.time_s
    }
}
