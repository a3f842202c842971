use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use serde::Deserialize;

use super::error::Error;
use crate::model::coeffs::{LjParams, PairCoeff};
use crate::model::site::Site;
use crate::model::template::{GroupAssignment, MoleculeTemplate};

const DEFAULT_TEMPLATES_TOML: &str = include_str!("../../resources/default.templates.toml");

static DEFAULT_LIBRARY: OnceLock<TemplateLibrary> = OnceLock::new();

#[derive(Debug, Clone, Deserialize)]
struct LibraryFile {
    #[serde(default)]
    templates: HashMap<String, TemplateSpec>,
}

#[derive(Debug, Clone, Deserialize)]
struct TemplateSpec {
    #[serde(default)]
    sites: Vec<SiteSpec>,
    #[serde(default)]
    masses: HashMap<String, f64>,
    #[serde(default)]
    pair_coeffs: Vec<PairCoeffSpec>,
    #[serde(default)]
    groups: Vec<GroupSpec>,
}

#[derive(Debug, Clone, Deserialize)]
struct SiteSpec {
    id: String,
    #[serde(rename = "type")]
    type_tag: String,
    #[serde(default)]
    charge: f64,
    #[serde(default)]
    position: [f64; 3],
}

/// Pair coefficients are given either directly as epsilon/sigma or as raw
/// 12-6 `A`/`B` coefficients, which get converted on load.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum PairCoeffSpec {
    LennardJones {
        types: [String; 2],
        epsilon: f64,
        sigma: f64,
        cutoff: Option<f64>,
        style: Option<String>,
    },
    TwelveSix {
        types: [String; 2],
        a: f64,
        b: f64,
        cutoff: Option<f64>,
        style: Option<String>,
    },
}

#[derive(Debug, Clone, Deserialize)]
struct GroupSpec {
    name: String,
    types: Vec<String>,
}

/// A validated collection of named molecule templates.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    templates: BTreeMap<String, MoleculeTemplate>,
}

impl TemplateLibrary {
    /// Parses a library from TOML and validates every template in it.
    pub fn parse(toml_str: &str) -> Result<Self, Error> {
        let file: LibraryFile = toml::from_str(toml_str)?;

        let mut templates = BTreeMap::new();
        for (name, spec) in file.templates {
            let template = build_template(&name, spec);
            super::validate(&template)?;
            templates.insert(name, template);
        }

        Ok(Self { templates })
    }

    /// Looks up a template by name.
    pub fn get(&self, name: &str) -> Result<&MoleculeTemplate, Error> {
        self.templates
            .get(name)
            .ok_or_else(|| Error::unknown_template(name, self.names()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn build_template(name: &str, spec: TemplateSpec) -> MoleculeTemplate {
    let mut template = MoleculeTemplate::new(name);

    for site in spec.sites {
        template
            .sites
            .push(Site::new(site.id, site.type_tag, site.charge, site.position));
    }

    template.masses = spec.masses.into_iter().collect();

    for coeff in spec.pair_coeffs {
        template.pair_coeffs.push(match coeff {
            PairCoeffSpec::LennardJones {
                types: [i, j],
                epsilon,
                sigma,
                cutoff,
                style,
            } => {
                let mut params = LjParams::new(epsilon, sigma);
                params.cutoff = cutoff;
                PairCoeff {
                    type_i: i,
                    type_j: j,
                    style,
                    params,
                }
            }
            PairCoeffSpec::TwelveSix {
                types: [i, j],
                a,
                b,
                cutoff,
                style,
            } => {
                let mut params = LjParams::from_ab(a, b);
                params.cutoff = cutoff;
                PairCoeff {
                    type_i: i,
                    type_j: j,
                    style,
                    params,
                }
            }
        });
    }

    for group in spec.groups {
        template
            .groups
            .push(GroupAssignment::new(group.name, group.types));
    }

    template
}

/// Loads a library from custom TOML, or the embedded default when `None`.
pub fn load_library(custom_toml: Option<&str>) -> Result<TemplateLibrary, Error> {
    match custom_toml {
        Some(toml) => TemplateLibrary::parse(toml),
        None => Ok(default_library().clone()),
    }
}

/// The embedded built-in library, parsed once on first use.
pub fn default_library() -> &'static TemplateLibrary {
    DEFAULT_LIBRARY.get_or_init(|| {
        TemplateLibrary::parse(DEFAULT_TEMPLATES_TOML)
            .expect("Failed to parse embedded default templates. This is a library bug.")
    })
}
