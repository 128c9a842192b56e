use std::{
  fmt::Display,
  ops::{Deref, DerefMut},
};

use crate::ConvertError;

#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  /// Typed errors carried by this `BuildError`, skipping anything that isn't a `ConvertError`.
  pub fn convert_errors(&self) -> impl Iterator<Item = &ConvertError> {
    self.0.iter().filter_map(|error| error.downcast_ref::<ConvertError>())
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (idx, error) in self.0.iter().enumerate() {
      if idx > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<ConvertError> for BuildError {
  fn from(error: ConvertError) -> Self {
    Self(vec![error.into()])
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_convert_errors() {
  let error = BuildError::from(vec![
    anyhow::anyhow!("unrelated"),
    ConvertError::UnknownEntry("a".to_string()).into(),
  ]);
  assert_eq!(error.len(), 2);
  assert!(matches!(error.convert_errors().next(), Some(ConvertError::UnknownEntry(id)) if id == "a"));
  assert_eq!(error.to_string(), "unrelated\nEntry `a` is not a root module of the bundle");
}
