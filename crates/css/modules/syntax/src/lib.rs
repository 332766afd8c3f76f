//! CSS Syntax Module Level 3 — Parsing and tokenization.
//! Spec: <https://www.w3.org/TR/css-syntax-3/>
use cssparser::AtRuleParser as CssAtRuleParser;
use cssparser::BasicParseErrorKind;
use cssparser::CowRcStr;
use cssparser::DeclarationParser as CssDeclarationParser;
use cssparser::ParseError;
use cssparser::Parser;
use cssparser::ParserInput;
use cssparser::ParserState;
use cssparser::QualifiedRuleParser as CssQualifiedRuleParser;
use cssparser::RuleBodyItemParser as CssRuleBodyItemParser;
use cssparser::RuleBodyParser as CssRuleBodyParser;
use cssparser::StyleSheetParser;
use cssparser::Token;

mod serialize;
mod tree;

/// A single CSS declaration (property: value [!important]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Lowercased property name.
    pub name: String,
    /// Raw value text (without trailing !important).
    pub value: String,
    /// Whether the declaration was marked as `!important`.
    pub important: bool,
}

impl Declaration {
    /// A normal (not `!important`) declaration.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            important: false,
        }
    }
}

/// A style rule with a raw prelude and its block contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRule {
    /// Raw prelude text (typically the selector list).
    pub prelude: String,
    /// Declarations and nested rules in source order.
    pub body: Vec<BodyItem>,
}

/// An at-rule such as `@media (...) { ... }` or `@wireframe red;`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtRule {
    /// At-rule name without the leading `@`.
    pub name: String,
    /// Raw prelude text, trimmed.
    pub prelude: String,
    /// Block contents, or `None` for statement at-rules ending in `;`.
    pub block: Option<Vec<BodyItem>>,
}

impl AtRule {
    /// Whether this at-rule is named `name` (ASCII case-insensitive).
    #[inline]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// A rule at any nesting level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    Style(StyleRule),
    At(AtRule),
}

/// One item inside a rule block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodyItem {
    Declaration(Declaration),
    Rule(Rule),
}

/// A parsed stylesheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// Top-level rules in source order.
    pub rules: Vec<Rule>,
}

/// Consume the rest of `input` and return its raw, trimmed text.
fn consume_raw<'input>(input: &mut Parser<'input, '_>) -> &'input str {
    let start = input.position();
    while input.next_including_whitespace_and_comments().is_ok() {}
    input.slice_from(start).trim()
}

/// Parse the items of a `{}` block: declarations, nested style rules and at-rules.
fn parse_body_items(block: &mut Parser) -> Vec<BodyItem> {
    let mut out: Vec<BodyItem> = Vec::new();
    let mut body = BodyParser;
    for item in CssRuleBodyParser::new(block, &mut body).flatten() {
        out.push(item);
    }
    out
}

/// Parser for the contents of a rule block.
struct BodyParser;

impl<'input> CssDeclarationParser<'input> for BodyParser {
    type Declaration = BodyItem;
    type Error = ();

    fn parse_value<'tokens>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, 'tokens>,
        _decl_start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'input, Self::Error>> {
        let start = input.position();
        // Position of a `!` that is followed only by `important`.
        let mut bang = None;
        let mut important = false;
        loop {
            let before = input.position();
            let nested = match input.next_including_whitespace_and_comments() {
                Ok(Token::WhiteSpace(_) | Token::Comment(_)) => continue,
                Ok(Token::CurlyBracketBlock) => true,
                Ok(Token::Delim('!')) => {
                    bang = Some(before);
                    important = false;
                    false
                }
                Ok(Token::Ident(ident))
                    if bang.is_some() && !important && ident.eq_ignore_ascii_case("important") =>
                {
                    important = true;
                    false
                }
                Ok(_) => {
                    bang = None;
                    important = false;
                    false
                }
                Err(_) => break,
            };
            // `a:hover { ... }` is a nested rule, not a declaration.
            if nested {
                return Err(input.new_error(BasicParseErrorKind::QualifiedRuleInvalid));
            }
        }
        let raw = match bang {
            Some(end) if important => input.slice(start..end),
            _ => input.slice_from(start),
        };
        Ok(BodyItem::Declaration(Declaration {
            name: name.to_ascii_lowercase(),
            value: raw.trim().to_owned(),
            important,
        }))
    }
}

impl<'input> CssAtRuleParser<'input> for BodyParser {
    type Prelude = (String, String);
    type AtRule = BodyItem;
    type Error = ();

    #[inline]
    fn parse_prelude<'tokens>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Ok((name.to_string(), consume_raw(input).to_owned()))
    }

    #[inline]
    fn parse_block<'tokens>(
        &mut self,
        prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::AtRule, ParseError<'input, Self::Error>> {
        let (name, raw) = prelude;
        Ok(BodyItem::Rule(Rule::At(AtRule {
            name,
            prelude: raw,
            block: Some(parse_body_items(input)),
        })))
    }

    #[inline]
    fn rule_without_block(
        &mut self,
        prelude: Self::Prelude,
        _state: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        let (name, raw) = prelude;
        Ok(BodyItem::Rule(Rule::At(AtRule {
            name,
            prelude: raw,
            block: None,
        })))
    }
}

impl<'input> CssQualifiedRuleParser<'input> for BodyParser {
    type Prelude = String;
    type QualifiedRule = BodyItem;
    type Error = ();

    #[inline]
    fn parse_prelude<'tokens>(
        &mut self,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Ok(consume_raw(input).to_owned())
    }

    #[inline]
    fn parse_block<'tokens>(
        &mut self,
        prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::QualifiedRule, ParseError<'input, Self::Error>> {
        Ok(BodyItem::Rule(Rule::Style(StyleRule {
            prelude,
            body: parse_body_items(input),
        })))
    }
}

impl<'input> CssRuleBodyItemParser<'input, BodyItem, ()> for BodyParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        true
    }
}

/// Top-level parser that builds `Rule` items for qualified rules and at-rules.
struct TopLevelParser;

impl<'input> CssAtRuleParser<'input> for TopLevelParser {
    type Prelude = (String, String);
    type AtRule = Rule;
    type Error = ();

    #[inline]
    fn parse_prelude<'tokens>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Ok((name.to_string(), consume_raw(input).to_owned()))
    }

    #[inline]
    fn parse_block<'tokens>(
        &mut self,
        prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::AtRule, ParseError<'input, Self::Error>> {
        let (name, raw) = prelude;
        Ok(Rule::At(AtRule {
            name,
            prelude: raw,
            block: Some(parse_body_items(input)),
        }))
    }

    #[inline]
    fn rule_without_block(
        &mut self,
        prelude: Self::Prelude,
        _state: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        let (name, raw) = prelude;
        Ok(Rule::At(AtRule {
            name,
            prelude: raw,
            block: None,
        }))
    }
}

impl<'input> CssQualifiedRuleParser<'input> for TopLevelParser {
    type Prelude = String; // raw selector/prelude
    type QualifiedRule = Rule;
    type Error = ();

    #[inline]
    fn parse_prelude<'tokens>(
        &mut self,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Ok(consume_raw(input).to_owned())
    }

    #[inline]
    fn parse_block<'tokens>(
        &mut self,
        prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::QualifiedRule, ParseError<'input, Self::Error>> {
        Ok(Rule::Style(StyleRule {
            prelude,
            body: parse_body_items(input),
        }))
    }
}

/// Parse a full stylesheet into a `Stylesheet` using cssparser.
///
/// Invalid rules are dropped following the CSS error-recovery rules; parsing
/// itself never fails.
pub fn parse_stylesheet(css: &str) -> Stylesheet {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut top = TopLevelParser;
    let mut sheet = Stylesheet::default();
    for rule in StyleSheetParser::new(&mut parser, &mut top).flatten() {
        sheet.rules.push(rule);
    }
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_style_rule(sheet: &Stylesheet) -> &StyleRule {
        match sheet.rules.as_slice() {
            [Rule::Style(rule)] => rule,
            other => panic!("expected a single style rule, got {other:?}"),
        }
    }

    #[test]
    /// # Panics
    /// Panics if declarations lose their names, values or importance.
    fn parses_declarations_and_important() {
        let sheet = parse_stylesheet(".box { Color: red; margin: 0 auto !important }");
        let rule = only_style_rule(&sheet);
        assert_eq!(rule.prelude, ".box");
        assert_eq!(
            rule.body,
            vec![
                BodyItem::Declaration(Declaration::new("color", "red")),
                BodyItem::Declaration(Declaration {
                    name: "margin".to_owned(),
                    value: "0 auto".to_owned(),
                    important: true,
                }),
            ]
        );
    }

    #[test]
    /// # Panics
    /// Panics if `!important` is detected inside strings or missed when spaced out.
    fn important_flag_comes_from_trailing_tokens() {
        let sheet = parse_stylesheet(
            ".q { content: \"x !important y\"; margin: 0 ! important; \
             background: url(a!important.png); color: red !IMPORTANT; top: 1px ! bogus }",
        );
        let rule = only_style_rule(&sheet);
        let flags: Vec<(&str, &str, bool)> = rule
            .body
            .iter()
            .filter_map(|item| match item {
                BodyItem::Declaration(decl) => {
                    Some((decl.name.as_str(), decl.value.as_str(), decl.important))
                }
                BodyItem::Rule(_) => None,
            })
            .collect();
        assert_eq!(
            flags,
            vec![
                ("content", "\"x !important y\"", false),
                ("margin", "0", true),
                ("background", "url(a!important.png)", false),
                ("color", "red", true),
                ("top", "1px ! bogus", false),
            ]
        );
    }

    #[test]
    /// # Panics
    /// Panics if at-rules inside a style rule are not kept in position.
    fn keeps_at_rules_inside_rule_bodies() {
        let sheet = parse_stylesheet(".card { color: blue; @wireframe  red   outline; top: 0 }");
        let rule = only_style_rule(&sheet);
        assert_eq!(rule.body.len(), 3);
        assert_eq!(
            rule.body[1],
            BodyItem::Rule(Rule::At(AtRule {
                name: "wireframe".to_owned(),
                prelude: "red   outline".to_owned(),
                block: None,
            }))
        );
    }

    #[test]
    /// # Panics
    /// Panics if nested rules are parsed as declarations or dropped.
    fn parses_nested_rules_and_blocks() {
        let css = "@media (max-width: 600px) { .a { width: 1px } }\n\
                   .b { a:hover { color: red } .c { @wireframe; } }";
        let sheet = parse_stylesheet(css);
        assert_eq!(sheet.rules.len(), 2);
        let Rule::At(media) = &sheet.rules[0] else {
            panic!("expected @media first");
        };
        assert!(media.is_named("MEDIA"));
        assert_eq!(media.prelude, "(max-width: 600px)");
        assert!(matches!(
            media.block.as_deref(),
            Some([BodyItem::Rule(Rule::Style(inner))]) if inner.prelude == ".a"
        ));
        let Rule::Style(outer) = &sheet.rules[1] else {
            panic!("expected style rule second");
        };
        assert!(matches!(
            outer.body.as_slice(),
            [BodyItem::Rule(Rule::Style(hover)), BodyItem::Rule(Rule::Style(nested))]
                if hover.prelude == "a:hover" && nested.prelude == ".c"
        ));
    }

    #[test]
    /// # Panics
    /// Panics if statement at-rules at top level are lost.
    fn keeps_top_level_statement_at_rules() {
        let sheet = parse_stylesheet("@import url(base.css);\n.x { }");
        assert!(matches!(
            sheet.rules.first(),
            Some(Rule::At(AtRule { name, prelude, block: None }))
                if name == "import" && prelude == "url(base.css)"
        ));
        assert_eq!(sheet.rules.len(), 2);
    }
}
