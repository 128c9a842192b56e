mod ecma_compiler;
mod define_scanner;

pub use crate::{define_scanner::DefineScanner, ecma_compiler::EcmaCompiler};
