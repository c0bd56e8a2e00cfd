//! Cyclomatic complexity and nesting depth measurement.
//!
//! The primary path parses the text into a Python AST and walks it with a
//! closed match over statement and expression kinds. Malformed input is not an
//! error: the engine falls back to counting branch keywords in the raw text.
//! The two paths deliberately disagree on the base unit — the tree walk
//! starts at 0 and lets each function definition contribute it, while the
//! keyword fallback starts at 1 — and that asymmetry is part of the contract.

use once_cell::sync::Lazy;
use regex::Regex;
use rustpython_parser::{ast, parse, Mode};

static FALLBACK_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bif\b", r"\belif\b", r"\bfor\b", r"\bwhile\b", r"\band\b", r"\bor\b", r"\bexcept\b",
        r"\bwith\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("fallback pattern is valid"))
    .collect()
});

/// Complexity and nesting for one unit of source text.
///
/// Returns `(cyclomatic_complexity, max_nesting_depth)`. Nesting is 0 on the
/// fallback path since no tree is available.
pub fn measure(content: &str) -> (u32, u32) {
    match parse(content, Mode::Module, "<module>") {
        Ok(module) => {
            let mut visitor = ComplexityVisitor::default();
            visitor.visit_module(&module);
            (visitor.complexity, visitor.max_nesting)
        }
        Err(err) => {
            log::debug!("falling back to keyword counting: {err}");
            (fallback_complexity(content), 0)
        }
    }
}

/// Keyword-count heuristic for text the parser rejects.
fn fallback_complexity(content: &str) -> u32 {
    let mut complexity = 1;
    for pattern in FALLBACK_PATTERNS.iter() {
        complexity += pattern.find_iter(content).count() as u32;
    }
    complexity
}

#[derive(Default)]
struct ComplexityVisitor {
    complexity: u32,
    max_nesting: u32,
    nesting: u32,
}

impl ComplexityVisitor {
    fn visit_module(&mut self, module: &ast::Mod) {
        if let ast::Mod::Module(module) = module {
            for stmt in &module.body {
                self.visit_stmt(stmt);
            }
        }
    }

    /// Enter a branch body: one nesting level for the duration of `body`.
    fn visit_nested_body(&mut self, body: &[ast::Stmt]) {
        self.nesting += 1;
        self.max_nesting = self.max_nesting.max(self.nesting);
        for stmt in body {
            self.visit_stmt(stmt);
        }
        self.nesting -= 1;
    }

    fn visit_function_parts(
        &mut self,
        decorators: &[ast::Expr],
        args: &ast::Arguments,
        returns: Option<&ast::Expr>,
        body: &[ast::Stmt],
    ) {
        self.complexity += 1;
        // Nesting is scoped to the enclosing function definition.
        let outer_nesting = self.nesting;
        self.nesting = 0;

        for dec in decorators {
            self.visit_expr(dec);
        }
        self.visit_arguments(args);
        if let Some(returns) = returns {
            self.visit_expr(returns);
        }
        for stmt in body {
            self.visit_stmt(stmt);
        }

        self.nesting = outer_nesting;
    }

    fn visit_arguments(&mut self, args: &ast::Arguments) {
        for arg in args
            .posonlyargs
            .iter()
            .chain(&args.args)
            .chain(&args.kwonlyargs)
        {
            if let Some(default) = &arg.default {
                self.visit_expr(default);
            }
        }
    }

    fn visit_stmt(&mut self, stmt: &ast::Stmt) {
        match stmt {
            ast::Stmt::FunctionDef(f) => {
                self.visit_function_parts(&f.decorator_list, &f.args, f.returns.as_deref(), &f.body);
            }
            ast::Stmt::AsyncFunctionDef(f) => {
                self.visit_function_parts(&f.decorator_list, &f.args, f.returns.as_deref(), &f.body);
            }
            ast::Stmt::ClassDef(c) => {
                for dec in &c.decorator_list {
                    self.visit_expr(dec);
                }
                for base in &c.bases {
                    self.visit_expr(base);
                }
                for kw in &c.keywords {
                    self.visit_expr(&kw.value);
                }
                for s in &c.body {
                    self.visit_stmt(s);
                }
            }
            ast::Stmt::If(if_stmt) => {
                self.complexity += 1;
                self.visit_expr(&if_stmt.test);
                self.visit_nested_body(&if_stmt.body);
                // An elif shows up as a nested If in orelse and counts again.
                self.visit_nested_body(&if_stmt.orelse);
            }
            ast::Stmt::For(for_stmt) => {
                self.complexity += 1;
                self.visit_expr(&for_stmt.target);
                self.visit_expr(&for_stmt.iter);
                self.visit_nested_body(&for_stmt.body);
                self.visit_nested_body(&for_stmt.orelse);
            }
            ast::Stmt::While(while_stmt) => {
                self.complexity += 1;
                self.visit_expr(&while_stmt.test);
                self.visit_nested_body(&while_stmt.body);
                self.visit_nested_body(&while_stmt.orelse);
            }
            // The async loop/context kinds are traversed but add nothing,
            // matching the legacy visitor's sync-only counting.
            ast::Stmt::AsyncFor(for_stmt) => {
                self.visit_expr(&for_stmt.target);
                self.visit_expr(&for_stmt.iter);
                for s in for_stmt.body.iter().chain(&for_stmt.orelse) {
                    self.visit_stmt(s);
                }
            }
            ast::Stmt::With(with_stmt) => {
                self.complexity += 1;
                self.visit_with_items(&with_stmt.items, &with_stmt.body);
            }
            ast::Stmt::AsyncWith(with_stmt) => {
                self.visit_with_items(&with_stmt.items, &with_stmt.body);
            }
            ast::Stmt::Try(try_stmt) => {
                self.visit_try_parts(
                    &try_stmt.body,
                    &try_stmt.handlers,
                    &try_stmt.orelse,
                    &try_stmt.finalbody,
                );
            }
            ast::Stmt::TryStar(try_stmt) => {
                self.visit_try_parts(
                    &try_stmt.body,
                    &try_stmt.handlers,
                    &try_stmt.orelse,
                    &try_stmt.finalbody,
                );
            }
            ast::Stmt::Match(match_stmt) => {
                self.visit_expr(&match_stmt.subject);
                for case in &match_stmt.cases {
                    if let Some(guard) = &case.guard {
                        self.visit_expr(guard);
                    }
                    for s in &case.body {
                        self.visit_stmt(s);
                    }
                }
            }
            ast::Stmt::Return(r) => {
                if let Some(value) = &r.value {
                    self.visit_expr(value);
                }
            }
            ast::Stmt::Delete(d) => {
                for target in &d.targets {
                    self.visit_expr(target);
                }
            }
            ast::Stmt::Assign(a) => {
                for target in &a.targets {
                    self.visit_expr(target);
                }
                self.visit_expr(&a.value);
            }
            ast::Stmt::AugAssign(a) => {
                self.visit_expr(&a.target);
                self.visit_expr(&a.value);
            }
            ast::Stmt::AnnAssign(a) => {
                self.visit_expr(&a.target);
                self.visit_expr(&a.annotation);
                if let Some(value) = &a.value {
                    self.visit_expr(value);
                }
            }
            ast::Stmt::Raise(r) => {
                if let Some(exc) = &r.exc {
                    self.visit_expr(exc);
                }
                if let Some(cause) = &r.cause {
                    self.visit_expr(cause);
                }
            }
            ast::Stmt::Assert(a) => {
                self.visit_expr(&a.test);
                if let Some(msg) = &a.msg {
                    self.visit_expr(msg);
                }
            }
            ast::Stmt::Expr(e) => self.visit_expr(&e.value),
            // Leaf statements: Import, ImportFrom, Global, Nonlocal, Pass,
            // Break, Continue and friends carry no counted constructs.
            _ => {}
        }
    }

    fn visit_with_items(&mut self, items: &[ast::WithItem], body: &[ast::Stmt]) {
        for item in items {
            self.visit_expr(&item.context_expr);
            if let Some(vars) = &item.optional_vars {
                self.visit_expr(vars);
            }
        }
        for s in body {
            self.visit_stmt(s);
        }
    }

    fn visit_try_parts(
        &mut self,
        body: &[ast::Stmt],
        handlers: &[ast::ExceptHandler],
        orelse: &[ast::Stmt],
        finalbody: &[ast::Stmt],
    ) {
        for s in body {
            self.visit_stmt(s);
        }
        for handler in handlers {
            self.complexity += 1;
            let ast::ExceptHandler::ExceptHandler(h) = handler;
            if let Some(type_) = &h.type_ {
                self.visit_expr(type_);
            }
            for s in &h.body {
                self.visit_stmt(s);
            }
        }
        for s in orelse.iter().chain(finalbody) {
            self.visit_stmt(s);
        }
    }

    fn visit_expr(&mut self, expr: &ast::Expr) {
        match expr {
            ast::Expr::BoolOp(bool_op) => {
                // A short-circuit chain of N operands adds N-1 paths.
                self.complexity += bool_op.values.len().saturating_sub(1) as u32;
                for value in &bool_op.values {
                    self.visit_expr(value);
                }
            }
            ast::Expr::NamedExpr(named) => {
                self.visit_expr(&named.target);
                self.visit_expr(&named.value);
            }
            ast::Expr::BinOp(bin_op) => {
                self.visit_expr(&bin_op.left);
                self.visit_expr(&bin_op.right);
            }
            ast::Expr::UnaryOp(unary_op) => self.visit_expr(&unary_op.operand),
            ast::Expr::Lambda(lambda) => {
                self.visit_arguments(&lambda.args);
                self.visit_expr(&lambda.body);
            }
            ast::Expr::IfExp(if_exp) => {
                self.visit_expr(&if_exp.test);
                self.visit_expr(&if_exp.body);
                self.visit_expr(&if_exp.orelse);
            }
            ast::Expr::Dict(dict) => {
                for key in dict.keys.iter().flatten() {
                    self.visit_expr(key);
                }
                for value in &dict.values {
                    self.visit_expr(value);
                }
            }
            ast::Expr::Set(set) => {
                for elt in &set.elts {
                    self.visit_expr(elt);
                }
            }
            ast::Expr::ListComp(comp) => {
                self.visit_expr(&comp.elt);
                self.visit_comprehensions(&comp.generators);
            }
            ast::Expr::SetComp(comp) => {
                self.visit_expr(&comp.elt);
                self.visit_comprehensions(&comp.generators);
            }
            ast::Expr::DictComp(comp) => {
                self.visit_expr(&comp.key);
                self.visit_expr(&comp.value);
                self.visit_comprehensions(&comp.generators);
            }
            ast::Expr::GeneratorExp(comp) => {
                self.visit_expr(&comp.elt);
                self.visit_comprehensions(&comp.generators);
            }
            ast::Expr::Await(await_expr) => self.visit_expr(&await_expr.value),
            ast::Expr::Yield(yield_expr) => {
                if let Some(value) = &yield_expr.value {
                    self.visit_expr(value);
                }
            }
            ast::Expr::YieldFrom(yield_from) => self.visit_expr(&yield_from.value),
            ast::Expr::Compare(compare) => {
                self.visit_expr(&compare.left);
                for comparator in &compare.comparators {
                    self.visit_expr(comparator);
                }
            }
            ast::Expr::Call(call) => {
                self.visit_expr(&call.func);
                for arg in &call.args {
                    self.visit_expr(arg);
                }
                for kw in &call.keywords {
                    self.visit_expr(&kw.value);
                }
            }
            ast::Expr::FormattedValue(fv) => {
                self.visit_expr(&fv.value);
                if let Some(spec) = &fv.format_spec {
                    self.visit_expr(spec);
                }
            }
            ast::Expr::JoinedStr(joined) => {
                for value in &joined.values {
                    self.visit_expr(value);
                }
            }
            ast::Expr::Attribute(attr) => self.visit_expr(&attr.value),
            ast::Expr::Subscript(sub) => {
                self.visit_expr(&sub.value);
                self.visit_expr(&sub.slice);
            }
            ast::Expr::Starred(starred) => self.visit_expr(&starred.value),
            ast::Expr::List(list) => {
                for elt in &list.elts {
                    self.visit_expr(elt);
                }
            }
            ast::Expr::Tuple(tuple) => {
                for elt in &tuple.elts {
                    self.visit_expr(elt);
                }
            }
            ast::Expr::Slice(slice) => {
                for part in [&slice.lower, &slice.upper, &slice.step]
                    .into_iter()
                    .flatten()
                {
                    self.visit_expr(part);
                }
            }
            // Name and Constant are leaves.
            _ => {}
        }
    }

    fn visit_comprehensions(&mut self, generators: &[ast::Comprehension]) {
        for generator in generators {
            self.visit_expr(&generator.target);
            self.visit_expr(&generator.iter);
            for if_clause in &generator.ifs {
                self.visit_expr(if_clause);
            }
        }
    }
}
