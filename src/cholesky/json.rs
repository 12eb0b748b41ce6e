use crate::algebra::*;
use crate::cholesky::CholeskySettings;

use serde::{de::DeserializeOwned, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// JSON file input and output for settings.  Missing fields take their
/// default values on read.
pub trait SettingsJSONReadWrite: Sized {
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error>;
    fn read_from_file(file: &mut File) -> Result<Self, io::Error>;
}

impl<T> SettingsJSONReadWrite for CholeskySettings<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json = serde_json::to_string(self)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let settings: CholeskySettings<T> = serde_json::from_str(&buffer)?;

        settings
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(settings)
    }
}

#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};

    let settings = crate::cholesky::CholeskySettingsBuilder::<f64>::default()
        .coarsening_threshold(0.3)
        .verbose(true)
        .build()
        .unwrap();

    let mut file = tempfile::tempfile().unwrap();
    settings.write_to_file(&mut file).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let settings2 = CholeskySettings::<f64>::read_from_file(&mut file).unwrap();
    assert_eq!(settings, settings2);
}

#[test]
fn test_json_partial_and_invalid() {
    use std::io::{Seek, SeekFrom};

    // missing fields take defaults
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(br#"{"dense_backend": "native"}"#).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let settings = CholeskySettings::<f64>::read_from_file(&mut file).unwrap();
    assert_eq!(settings.dense_backend, "native");
    assert_eq!(settings.coarsening_threshold, 0.1);

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(br#"{"coarsening_threshold": 2.0}"#).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let err = CholeskySettings::<f64>::read_from_file(&mut file).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}
