//! A single post-order pass over a parsed [`usgc_par::Node`] tree, checking
//! the two consistency rules a syntactically valid tree can still violate.
//! The checker never rewrites the tree; it only reports into the same
//! [`Handler`] the lexer and parser already write to.

use usgc_par::{Node, OptionData};
use usgc_util::diagnostic::{DiagnosticBuilder, Handler};

/// Walks a [`Node::Root`], reporting program-name and option-description
/// inconsistencies. Holds nothing but a reference to the sink it reports
/// into — there's no mutable state to carry between rules.
pub struct Checker<'a> {
    handler: &'a Handler,
}

impl<'a> Checker<'a> {
    pub fn new(handler: &'a Handler) -> Self {
        Checker { handler }
    }

    /// Run both rules over `root`. `root` must be a [`Node::Root`]; callers
    /// that got an [`Node::Error`] back from the parser (a missing usage
    /// section) have nothing here to check and shouldn't call this.
    pub fn check(&self, root: &Node<'_>) {
        let Some(root) = root.as_root() else { return };

        self.check_program_names(root.usages.as_slice());
        for desc in &root.descs {
            let Some(desc) = desc.as_desc() else { continue };
            self.check_option_descriptions(desc.options.as_slice(), desc.default_val.as_deref());
        }
    }

    /// Every usage after the first must share the first usage's program
    /// name (spec 4.3 rule 1).
    fn check_program_names(&self, usages: &[&Node<'_>]) {
        let Some((first, rest)) = usages.split_first() else { return };
        let Some(first) = first.as_usage() else { return };

        for usage in rest {
            let Some(usage) = usage.as_usage() else { continue };
            if usage.prog != first.prog {
                DiagnosticBuilder::error(format!(
                    "expected program name '{}', but got '{}'",
                    first.prog, usage.prog
                ))
                .range(usage.range.clone())
                .emit(self.handler);
            }
        }
    }

    /// Every option in a Desc must agree with the first option on whether
    /// it takes an argument; a `[default: ...]` only makes sense if the
    /// reference option actually takes one (spec 4.3 rule 2).
    fn check_option_descriptions(&self, options: &[&Node<'_>], default_val: Option<&str>) {
        let Some((first, rest)) = options.split_first() else { return };
        let Some(reference) = first.as_option() else { return };

        for option in rest {
            let Some(option) = option.as_option() else { continue };
            if option.arg.is_some() != reference.arg.is_some() {
                let (with_arg, without_arg) =
                    if reference.arg.is_some() { (reference, option) } else { (option, reference) };
                DiagnosticBuilder::error(format!(
                    "option '{}' requires an argument, but option '{}' does not",
                    option_label(with_arg),
                    option_label(without_arg),
                ))
                .range(option.range.clone())
                .emit(self.handler);
            }
        }

        if default_val.is_some() && reference.arg.is_none() {
            DiagnosticBuilder::error(format!(
                "option '{}' has no arguments and cannot have a default value",
                option_label(reference),
            ))
            .range(reference.range.clone())
            .emit(self.handler);
        }
    }
}

fn option_label(option: &OptionData<'_>) -> String {
    format!("{}{}", if option.is_short { "-" } else { "--" }, option.name)
}
