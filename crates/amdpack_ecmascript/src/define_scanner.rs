use amdpack_common::{ModuleId, ModuleRecord};
use amdpack_error::{BuildResult, ConvertError};
use oxc::{
  ast::ast::{ArrayExpressionElement, CallExpression, Expression, FunctionBody},
  ast_visit::{walk, Visit},
  span::{GetSpan, Span},
};

/// Collects `define(id, [dependencies], factory)` call sites.
///
/// Factories are opaque module code: the scanner does not descend into the arguments of a
/// `define` call, so a `define` nested inside a factory is not a registration of the bundle.
pub struct DefineScanner<'src> {
  source: &'src str,
  records: Vec<ModuleRecord>,
  errors: Vec<anyhow::Error>,
}

impl<'src> DefineScanner<'src> {
  pub fn new(source: &'src str) -> Self {
    Self { source, records: Vec::new(), errors: Vec::new() }
  }

  pub fn finish(self) -> BuildResult<Vec<ModuleRecord>> {
    if self.errors.is_empty() {
      log::debug!("Discovered {} module(s)", self.records.len());
      Ok(self.records)
    } else {
      Err(self.errors.into())
    }
  }

  fn scan_define(&self, call: &CallExpression<'_>) -> Result<ModuleRecord, ConvertError> {
    let mut args = Vec::with_capacity(call.arguments.len());
    for arg in &call.arguments {
      let Some(expr) = arg.as_expression() else {
        return Err(malformed(arg.span(), "spread arguments are not supported"));
      };
      args.push(expr.without_parentheses());
    }

    let (id, dependencies, factory) = match args.as_slice() {
      [id, factory] => (*id, None, *factory),
      [id, dependencies, factory] => (*id, Some(*dependencies), *factory),
      _ => return Err(malformed(call.span, "expected `define(id, [dependencies], factory)`")),
    };

    let Expression::StringLiteral(id) = id else {
      return Err(malformed(id.span(), "module id must be a string literal"));
    };

    let dependencies = match dependencies {
      Some(Expression::ArrayExpression(array)) => array
        .elements
        .iter()
        .map(|element| match element {
          ArrayExpressionElement::StringLiteral(dep) => Ok(ModuleId::new(dep.value.as_str())),
          _ => Err(malformed(element.span(), "dependency ids must be string literals")),
        })
        .collect::<Result<Vec<_>, _>>()?,
      Some(other) => {
        return Err(malformed(other.span(), "dependencies must be an array literal"));
      }
      None => Vec::new(),
    };

    let body = match factory {
      Expression::FunctionExpression(func) => func.body.as_deref(),
      Expression::ArrowFunctionExpression(arrow) if !arrow.expression => Some(&*arrow.body),
      _ => None,
    };
    let Some(body) = body else {
      return Err(malformed(factory.span(), "factory must be a function with a block body"));
    };

    Ok(ModuleRecord {
      id: ModuleId::new(id.value.as_str()),
      dependencies,
      body: self.body_text(body).to_string(),
    })
  }

  /// Text between the braces of `body`.
  fn body_text(&self, body: &FunctionBody<'_>) -> &'src str {
    let start = body.span.start + 1;
    let end = body.span.end.saturating_sub(1).max(start);
    Span::new(start, end).source_text(self.source)
  }
}

impl<'a> Visit<'a> for DefineScanner<'_> {
  fn visit_call_expression(&mut self, it: &CallExpression<'a>) {
    if !is_define_callee(&it.callee) {
      walk::walk_call_expression(self, it);
      return;
    }

    match self.scan_define(it) {
      Ok(record) => {
        log::trace!("Found module `{}` depending on {:?}", record.id, record.dependencies);
        self.records.push(record);
      }
      Err(error) => self.errors.push(error.into()),
    }
  }
}

fn is_define_callee(callee: &Expression<'_>) -> bool {
  matches!(callee.without_parentheses(), Expression::Identifier(ident) if ident.name.as_str() == "define")
}

fn malformed(span: Span, reason: &str) -> ConvertError {
  ConvertError::MalformedDefine { reason: reason.to_string(), start: span.start, end: span.end }
}
