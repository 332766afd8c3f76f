//! Serialization of the rule tree back to CSS text.
//! Spec: <https://www.w3.org/TR/cssom-1/#serializing-css-values>

use crate::{AtRule, BodyItem, Declaration, Rule, StyleRule, Stylesheet};
use std::fmt::{self, Display, Formatter, Write};

const INDENT: &str = "    ";

impl Display for Declaration {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        if self.important {
            write!(formatter, "{}: {} !important", self.name, self.value)
        } else {
            write!(formatter, "{}: {}", self.name, self.value)
        }
    }
}

impl Display for Stylesheet {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for (index, rule) in self.rules.iter().enumerate() {
            if index > 0 {
                formatter.write_char('\n')?;
            }
            write_rule(formatter, rule, 0)?;
        }
        Ok(())
    }
}

fn write_indent(out: &mut impl Write, depth: usize) -> fmt::Result {
    for _level in 0..depth {
        out.write_str(INDENT)?;
    }
    Ok(())
}

fn write_rule(out: &mut impl Write, rule: &Rule, depth: usize) -> fmt::Result {
    match rule {
        Rule::Style(style) => write_style_rule(out, style, depth),
        Rule::At(at_rule) => write_at_rule(out, at_rule, depth),
    }
}

fn write_style_rule(out: &mut impl Write, rule: &StyleRule, depth: usize) -> fmt::Result {
    write_indent(out, depth)?;
    writeln!(out, "{} {{", rule.prelude)?;
    write_body(out, &rule.body, depth + 1)?;
    write_indent(out, depth)?;
    out.write_str("}\n")
}

fn write_at_rule(out: &mut impl Write, rule: &AtRule, depth: usize) -> fmt::Result {
    write_indent(out, depth)?;
    write!(out, "@{}", rule.name)?;
    if !rule.prelude.is_empty() {
        write!(out, " {}", rule.prelude)?;
    }
    match &rule.block {
        None => out.write_str(";\n"),
        Some(items) => {
            out.write_str(" {\n")?;
            write_body(out, items, depth + 1)?;
            write_indent(out, depth)?;
            out.write_str("}\n")
        }
    }
}

fn write_body(out: &mut impl Write, items: &[BodyItem], depth: usize) -> fmt::Result {
    for item in items {
        match item {
            BodyItem::Declaration(declaration) => {
                write_indent(out, depth)?;
                writeln!(out, "{declaration};")?;
            }
            BodyItem::Rule(rule) => write_rule(out, rule, depth)?,
        }
    }
    Ok(())
}
