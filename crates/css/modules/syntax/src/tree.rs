//! In-place edits on a parsed stylesheet: prepending fragments and replacing
//! at-rules with declarations.

use crate::{AtRule, BodyItem, Declaration, Rule, StyleRule, Stylesheet};
use core::mem;
use log::warn;

impl Stylesheet {
    /// Insert every rule of `fragment` before the existing rules.
    pub fn prepend(&mut self, fragment: Self) {
        let existing = mem::take(&mut self.rules);
        self.rules = fragment.rules;
        self.rules.extend(existing);
    }

    /// Whether an at-rule named `name` appears anywhere in the sheet.
    pub fn contains_at_rule(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule_contains(rule, name))
    }

    /// Replace every at-rule named `name` with the declarations returned by
    /// `expand`, in source order.
    ///
    /// `expand` receives the at-rule and the prelude of the nearest enclosing
    /// style rule, if any. Matching at-rules at the top level of the sheet
    /// have nowhere to put declarations and are removed.
    ///
    /// Returns the number of at-rules that were expanded.
    pub fn replace_at_rules<F>(&mut self, name: &str, mut expand: F) -> usize
    where
        F: FnMut(&AtRule, Option<&str>) -> Vec<Declaration>,
    {
        let mut expanded = 0;
        let rules = mem::take(&mut self.rules);
        for rule in rules {
            match rule {
                Rule::At(at_rule) if at_rule.is_named(name) => {
                    warn!(
                        "dropping top-level @{} {}: it must be nested in a style rule",
                        at_rule.name, at_rule.prelude
                    );
                }
                Rule::At(mut at_rule) => {
                    if let Some(items) = at_rule.block.as_mut() {
                        expanded += replace_in_body(items, name, None, &mut expand);
                    }
                    self.rules.push(Rule::At(at_rule));
                }
                Rule::Style(mut style) => {
                    expanded += replace_in_style(&mut style, name, &mut expand);
                    self.rules.push(Rule::Style(style));
                }
            }
        }
        expanded
    }
}

fn rule_contains(rule: &Rule, name: &str) -> bool {
    match rule {
        Rule::Style(style) => body_contains(&style.body, name),
        Rule::At(at_rule) => {
            at_rule.is_named(name)
                || at_rule
                    .block
                    .as_deref()
                    .is_some_and(|items| body_contains(items, name))
        }
    }
}

fn body_contains(items: &[BodyItem], name: &str) -> bool {
    items.iter().any(|item| match item {
        BodyItem::Declaration(_) => false,
        BodyItem::Rule(rule) => rule_contains(rule, name),
    })
}

fn replace_in_style<F>(style: &mut StyleRule, name: &str, expand: &mut F) -> usize
where
    F: FnMut(&AtRule, Option<&str>) -> Vec<Declaration>,
{
    let StyleRule { prelude, body } = style;
    replace_in_body(body, name, Some(prelude.as_str()), expand)
}

fn replace_in_body<F>(
    items: &mut Vec<BodyItem>,
    name: &str,
    selector: Option<&str>,
    expand: &mut F,
) -> usize
where
    F: FnMut(&AtRule, Option<&str>) -> Vec<Declaration>,
{
    let mut expanded = 0;
    let original = mem::take(items);
    items.reserve(original.len());
    for item in original {
        match item {
            BodyItem::Rule(Rule::At(at_rule)) if at_rule.is_named(name) => {
                items.extend(
                    expand(&at_rule, selector)
                        .into_iter()
                        .map(BodyItem::Declaration),
                );
                expanded += 1;
            }
            BodyItem::Rule(Rule::At(mut at_rule)) => {
                if let Some(nested) = at_rule.block.as_mut() {
                    expanded += replace_in_body(nested, name, selector, expand);
                }
                items.push(BodyItem::Rule(Rule::At(at_rule)));
            }
            BodyItem::Rule(Rule::Style(mut style)) => {
                expanded += replace_in_style(&mut style, name, expand);
                items.push(BodyItem::Rule(Rule::Style(style)));
            }
            BodyItem::Declaration(declaration) => {
                items.push(BodyItem::Declaration(declaration));
            }
        }
    }
    expanded
}
