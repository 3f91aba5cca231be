use std::path::{Path, PathBuf};
use std::fs::File;
use std::io::BufReader;
use serde_json;
use serde_yaml;
use semeval::prelude::*;
use errors::*;

/// One guessed/reference pair of a batch manifest. Paths are relative to the manifest.
#[derive(Deserialize, Debug, Clone)]
pub struct PairInput {
    pub id: String,
    pub guessed: PathBuf,
    pub reference: PathBuf,
}

#[derive(Deserialize, Debug)]
pub struct Manifest {
    pub pairs: Vec<PairInput>,
}

#[derive(Deserialize, Debug)]
pub struct Configuration {
    pub settings: Settings
}

impl Manifest {
    pub fn from_file(fmanifest: &Path) -> Result<Manifest> {
        let reader = BufReader::new(File::open(fmanifest).chain_err(|| format!("cannot open manifest {:?}", fmanifest))?);
        let mut manifest: Manifest = serde_json::from_reader(reader).chain_err(|| format!("invalid manifest {:?}", fmanifest))?;

        let workdir = fmanifest.parent().map(|p| p.to_path_buf()).unwrap_or_default();
        for pair in manifest.pairs.iter_mut() {
            pair.guessed = workdir.join(&pair.guessed);
            pair.reference = workdir.join(&pair.reference);
        }

        Ok(manifest)
    }
}

pub fn load_json(finput: &Path) -> Result<serde_json::Value> {
    let reader = BufReader::new(File::open(finput).chain_err(|| format!("cannot open {:?}", finput))?);
    Ok(serde_json::from_reader(reader).chain_err(|| format!("{:?} is not a json file", finput))?)
}

/// Settings are read from the `settings` key of a yaml file
pub fn load_settings(fsettings: &Path) -> Result<Settings> {
    let reader = BufReader::new(File::open(fsettings).chain_err(|| format!("cannot open settings {:?}", fsettings))?);
    let conf: Configuration = serde_yaml::from_reader(reader).chain_err(|| format!("invalid settings {:?}", fsettings))?;
    Ok(conf.settings)
}

/// Parse a comma separated list such as `labeled,unlabeled`
pub fn parse_eval_types(s: &str) -> Result<Vec<EvalType>> {
    let eval_types = s.split(',')
        .filter(|t| !t.trim().is_empty())
        .map(|t| t.parse::<EvalType>())
        .collect::<::std::result::Result<Vec<_>, _>>()?;

    if eval_types.is_empty() {
        bail!("at least one evaluation type is required");
    }
    Ok(eval_types)
}
