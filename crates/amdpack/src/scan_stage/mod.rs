use amdpack_common::ModuleRecord;
use amdpack_ecmascript::EcmaCompiler;
use amdpack_error::BuildResult;

#[derive(Debug)]
pub struct ScanStageOutput {
  pub records: Vec<ModuleRecord>,
}

pub struct ScanStage<'code> {
  code: &'code str,
}

impl<'code> ScanStage<'code> {
  pub fn new(code: &'code str) -> Self {
    Self { code }
  }

  pub fn scan(&self) -> BuildResult<ScanStageOutput> {
    let records = EcmaCompiler::scan_module_records(self.code)?;
    Ok(ScanStageOutput { records })
  }
}
