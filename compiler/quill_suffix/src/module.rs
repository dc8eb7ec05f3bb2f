//! Checking a whole module.
//!
//! Declarations are validated first into a [`SuffixTable`]. Each `let` item
//! is then checked by its own [`ExprChecker`] with its own diagnostic queue,
//! so items can be checked on separate threads. Per-item results are merged
//! back in source order, making the output independent of scheduling.

use quill_diagnostic::queue::{DiagnosticConfig, DiagnosticQueue};
use quill_diagnostic::ErrorGuaranteed;
use quill_ir::{ExprArena, LetItem, Module, Name, StringInterner};
use rayon::prelude::*;

use crate::{ExprChecker, OverloadResolver, SuffixResolver, SuffixRewrite, SuffixTable, ValueType};

/// Options for [`check_module`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CheckOptions {
    /// Check `let` items on the rayon thread pool.
    pub parallel: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions { parallel: true }
    }
}

/// The checked form of one `let` item.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CheckedItem {
    pub name: Name,
    pub value: ValueType,
    pub rewrites: Vec<SuffixRewrite>,
}

/// A module that checked without errors.
///
/// Items whose expression already failed to parse are absent; the parser
/// reported them.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CheckedModule {
    pub table: SuffixTable,
    pub items: Vec<CheckedItem>,
}

impl CheckedModule {
    /// Every rewritten suffix call, in source order.
    pub fn rewrites(&self) -> impl Iterator<Item = &SuffixRewrite> {
        self.items.iter().flat_map(|item| item.rewrites.iter())
    }
}

/// Check a module, reporting into `queue`.
///
/// Dispatches to [`check_module_parallel`] when `options.parallel` is set.
pub fn check_module(
    module: &Module,
    arena: &ExprArena,
    interner: &StringInterner,
    options: CheckOptions,
    queue: &mut DiagnosticQueue,
) -> Result<CheckedModule, ErrorGuaranteed> {
    if options.parallel {
        return check_module_parallel(module, arena, interner, queue);
    }
    check_with(module, interner, queue, |table, items| {
        items
            .iter()
            .map(|item| check_item(item, arena, interner, table))
            .collect()
    })
}

/// Check a module's `let` items in parallel.
pub fn check_module_parallel(
    module: &Module,
    arena: &ExprArena,
    interner: &StringInterner,
    queue: &mut DiagnosticQueue,
) -> Result<CheckedModule, ErrorGuaranteed> {
    check_with(module, interner, queue, |table, items| {
        items
            .par_iter()
            .map(|item| check_item(item, arena, interner, table))
            .collect()
    })
}

type ItemResult = (Option<CheckedItem>, DiagnosticQueue);

#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(functions = module.functions.len(), items = module.lets.len())
)]
fn check_with(
    module: &Module,
    interner: &StringInterner,
    queue: &mut DiagnosticQueue,
    run: impl FnOnce(&SuffixTable, &[LetItem]) -> Vec<ItemResult>,
) -> Result<CheckedModule, ErrorGuaranteed> {
    let mut table_queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    let table = SuffixTable::build(&module.functions, interner, &mut table_queue);
    let mut errors = table_queue.error_count();
    queue.extend(table_queue);

    let mut items = Vec::with_capacity(module.lets.len());
    for (item, item_queue) in run(&table, &module.lets) {
        errors += item_queue.error_count();
        queue.extend(item_queue);
        items.extend(item);
    }

    match ErrorGuaranteed::from_error_count(errors) {
        Some(guarantee) => Err(guarantee),
        None => Ok(CheckedModule { table, items }),
    }
}

fn check_item(
    item: &LetItem,
    arena: &ExprArena,
    interner: &StringInterner,
    table: &SuffixTable,
) -> ItemResult {
    let calls = OverloadResolver::new(table, interner);
    let mut checker = ExprChecker::new(
        arena,
        interner,
        SuffixResolver::new(table, interner),
        &calls,
        DiagnosticQueue::with_config(DiagnosticConfig::unlimited()),
    );
    let value = checker.check(item.expr);
    let (rewrites, queue) = checker.finish();
    let checked = value.map(|value| CheckedItem {
        name: item.name,
        value,
        rewrites,
    });
    (checked, queue)
}
