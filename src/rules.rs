use std::fmt::Display;

use regex::{Captures, Regex};

use crate::boilerplate::OPERATION_TYPE_ENUM;

/// A single rewrite rule of the Flow to Haxe translation.
///
/// Rules are applied in the order of [`Rule::ALL`]. Several rules only match text that an earlier rule
/// already normalized (for example [`Rule::OptionalValue`] expects the `:String` produced by
/// [`Rule::Primitives`]), so the order is part of the meaning of the ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `export type` becomes `typedef`, keeping the original as a comment.
    ExportType,

    /// `name?:` (optionally followed by a `?` nullability marker) becomes the prefix form `?name :`.
    OptionalField,

    /// `boolean`, `string` and `number` annotations become `Bool`, `String` and `Int`.
    Primitives,

    /// Leading `+` variance markers on indented lines are dropped.
    Variance,

    /// A multi-line `Node =` union of `| Variant` lines collapses to `BaseNode`.
    MultiLineUnion,

    /// A single-line `Node = A | B;` union collapses to `BaseNode`.
    SingleLineUnion,

    /// `NamedTypeNode | ListTypeNode` collapses to the structural `TypeNode`.
    TypeNodeUnion,

    /// Remaining `TypeNode` typedefs are commented out, since the boilerplate defines `TypeNode`.
    SupersededTypeNode,

    /// Indented `prev`/`next` fields of type `Token | null` become `Null<Token>`.
    NullableToken,

    /// `value:String | void` becomes an optional `Null<String>`.
    OptionalValue,

    /// `import type` lines are commented out.
    ImportType,

    /// `kind: 'Literal'` discriminants become `kind: String` with the literal kept as a comment.
    KindLiteral,

    /// `$ReadOnlyArray` becomes a plain `Array`.
    ReadOnlyArray,

    /// The `OperationTypeNode` typedef is replaced by a string-backed enum abstract.
    OperationType,
}

/// How the text matched by a rule pattern is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// Inserted as is. `$` has no special meaning.
    Literal(&'static str),

    /// Expanded with [`Captures::expand`], so `${1}` refers to the first capture group.
    Template(&'static str),

    /// The whole match is commented out and the given block is inserted on the following lines.
    Supersede(&'static str),
}

impl Replacement {
    fn render(&self, caps: &Captures<'_>) -> String {
        match self {
            Replacement::Literal(text) => text.to_string(),
            Replacement::Template(template) => {
                let mut dst = String::new();
                caps.expand(template, &mut dst);
                dst
            }
            Replacement::Supersede(block) => format!("//  {} \n{}", &caps[0], block),
        }
    }
}

impl Rule {
    /// Every rule, in application order.
    pub const ALL: [Rule; 14] = [
        Rule::ExportType,
        Rule::OptionalField,
        Rule::Primitives,
        Rule::Variance,
        Rule::MultiLineUnion,
        Rule::SingleLineUnion,
        Rule::TypeNodeUnion,
        Rule::SupersededTypeNode,
        Rule::NullableToken,
        Rule::OptionalValue,
        Rule::ImportType,
        Rule::KindLiteral,
        Rule::ReadOnlyArray,
        Rule::OperationType,
    ];

    /// The pattern/replacement pairs making up this rule, applied left to right.
    pub fn substitutions(self) -> &'static [(&'static str, Replacement)] {
        use Replacement::*;

        match self {
            Rule::ExportType => &[("export type", Literal("typedef /* export type */"))],
            Rule::OptionalField => &[(r"(\w+)\?:(\s+\?)?", Template("?${1} /* opt */ :"))],
            Rule::Primitives => &[
                (r":\s*boolean\b", Literal(":Bool")),
                (r":\s*string\b", Literal(":String")),
                (r":\s*number\b", Literal(":Int /* number */")),
            ],
            Rule::Variance => &[(r"(?m)^(\s+)\+", Template("${1}"))],
            Rule::MultiLineUnion => &[(
                r"(?s)Node =(\s*\n\s+\|.*?;)",
                Template("Node = BaseNode; /* ${1} */"),
            )],
            Rule::SingleLineUnion => &[(
                r"Node = (\w+\s+\|.*?;)",
                Template("Node = BaseNode; /* ${1} */"),
            )],
            Rule::TypeNodeUnion => &[(
                r"\bNamedTypeNode \| ListTypeNode\b",
                Literal("TypeNode /* NamedTypeNode | ListTypeNode */"),
            )],
            Rule::SupersededTypeNode => &[(r"(?m)^(typedef .*? TypeNode .*)", Template("// ${1}"))],
            Rule::NullableToken => &[(
                r"(?m)^\s+(prev|next):\s*Token \| null",
                Template("  ?${1}: Null<Token>"),
            )],
            Rule::OptionalValue => &[(r"value:String \| void", Literal("?value:Null<String>"))],
            Rule::ImportType => &[(r"(?m)^(import type .*)", Template("// ${1}"))],
            Rule::KindLiteral => &[(r"kind: ('\w+')[,;]?", Template("kind: String, // ${1}"))],
            Rule::ReadOnlyArray => &[(r"\$ReadOnlyArray", Literal("/* $ReadOnlyArray */Array"))],
            Rule::OperationType => &[(
                r"typedef .*? OperationTypeNode.*",
                Supersede(OPERATION_TYPE_ENUM),
            )],
        }
    }

    /// Compiles the patterns of this rule.
    pub fn compile(self) -> Result<CompiledRule, regex::Error> {
        let substitutions = self
            .substitutions()
            .iter()
            .map(|(pattern, replacement)| Regex::new(pattern).map(|regex| (regex, *replacement)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CompiledRule {
            rule: self,
            substitutions,
        })
    }

    /// The 1-based position of this rule in [`Rule::ALL`].
    pub fn number(self) -> usize {
        Rule::ALL
            .iter()
            .position(|r| *r == self)
            .map_or(0, |i| i + 1)
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rule::ExportType => "export-type",
            Rule::OptionalField => "optional-field",
            Rule::Primitives => "primitives",
            Rule::Variance => "variance",
            Rule::MultiLineUnion => "multi-line-union",
            Rule::SingleLineUnion => "single-line-union",
            Rule::TypeNodeUnion => "type-node-union",
            Rule::SupersededTypeNode => "superseded-type-node",
            Rule::NullableToken => "nullable-token",
            Rule::OptionalValue => "optional-value",
            Rule::ImportType => "import-type",
            Rule::KindLiteral => "kind-literal",
            Rule::ReadOnlyArray => "read-only-array",
            Rule::OperationType => "operation-type",
        };
        write!(f, "{}", name)
    }
}

/// A [`Rule`] with its patterns compiled.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: Rule,
    substitutions: Vec<(Regex, Replacement)>,
}

impl CompiledRule {
    /// The rule this was compiled from.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Rewrites every match of the rule in `text`. Text that does not match passes through unchanged.
    pub fn apply(&self, text: String) -> String {
        self.apply_counted(text).0
    }

    /// Like [`CompiledRule::apply`], also returning how many replacements were made.
    pub fn apply_counted(&self, mut text: String) -> (String, usize) {
        let mut count = 0;
        for (regex, replacement) in &self.substitutions {
            text = regex
                .replace_all(&text, |caps: &Captures<'_>| {
                    count += 1;
                    replacement.render(caps)
                })
                .into_owned();
        }
        (text, count)
    }
}

/// All rules compiled, in application order.
#[derive(Debug, Clone)]
pub struct Ruleset {
    rules: Vec<CompiledRule>,
}

impl Ruleset {
    /// Compiles every rule of [`Rule::ALL`].
    pub fn compile() -> Result<Self, regex::Error> {
        let rules = Rule::ALL
            .iter()
            .map(|rule| rule.compile())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Iterates the compiled rules in application order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Rule;
    use crate::testing::*;

    #[test]
    fn every_rule_compiles() {
        for rule in Rule::ALL {
            assert!(rule.compile().is_ok(), "rule {} failed to compile", rule);
        }
    }

    #[test]
    fn numbering() {
        assert_eq!(Rule::ExportType.number(), 1);
        assert_eq!(Rule::KindLiteral.number(), 12);
        assert_eq!(Rule::OperationType.number(), 14);
    }

    #[test]
    fn fixed_string_rules_ignore_unrelated_text() {
        let text = "const answer = 42;\n// nothing to see here\n";
        for rule in [Rule::ExportType, Rule::Primitives, Rule::ReadOnlyArray] {
            assert_eq!(apply(rule, text), text, "rule {}", rule);
        }
    }

    #[test]
    fn export_type() {
        assert_eq!(
            apply(Rule::ExportType, "export type NameNode = {"),
            "typedef /* export type */ NameNode = {"
        );
    }

    #[test]
    fn export_type_is_not_idempotent() {
        let once = apply(Rule::ExportType, "export type A = B;");
        let twice = apply(Rule::ExportType, &once);
        assert_ne!(once, twice);
        assert_eq!(twice, "typedef /* typedef /* export type */ */ A = B;");
    }

    #[test]
    fn optional_field() {
        assert_eq!(
            apply(Rule::OptionalField, "  +loc?: Location,"),
            "  +?loc /* opt */ : Location,"
        );
        assert_eq!(
            apply(Rule::OptionalField, "  description?: ?StringValueNode,"),
            "  ?description /* opt */ :StringValueNode,"
        );
    }

    #[test]
    fn primitives() {
        assert_eq!(apply(Rule::Primitives, "  block: boolean,"), "  block:Bool,");
        assert_eq!(apply(Rule::Primitives, "  value: string,"), "  value:String,");
        assert_eq!(
            apply(Rule::Primitives, "  line: number,"),
            "  line:Int /* number */,"
        );
    }

    #[test]
    fn primitives_respect_word_boundaries() {
        let text = "  kind: stringish,\n  size: numbers,";
        assert_eq!(apply(Rule::Primitives, text), text);
    }

    #[test]
    fn primitives_are_idempotent() {
        let once = apply(Rule::Primitives, "a: boolean, b: string, c: number");
        assert_eq!(once, "a:Bool, b:String, c:Int /* number */");
        assert_eq!(apply(Rule::Primitives, &once), once);
    }

    #[test]
    fn variance() {
        assert_eq!(
            apply(Rule::Variance, "  +start: number,\n+top: Level;"),
            "  start: number,\n+top: Level;"
        );
    }

    #[test]
    fn multi_line_union() {
        let text = "typedef /* export type */ ValueNode =\n  | VariableNode\n  | IntValueNode\n  | ObjectValueNode;";
        assert_eq!(
            apply(Rule::MultiLineUnion, text),
            "typedef /* export type */ ValueNode = BaseNode; /* \n  | VariableNode\n  | IntValueNode\n  | ObjectValueNode; */"
        );
    }

    #[test]
    fn multi_line_union_ignores_object_types() {
        let text = "typedef /* export type */ NameNode = {\n  kind: String,\n};";
        assert_eq!(apply(Rule::MultiLineUnion, text), text);
    }

    #[test]
    fn single_line_union() {
        assert_eq!(
            apply(
                Rule::SingleLineUnion,
                "typedef ExecutableDefinitionNode = OperationDefinitionNode | FragmentDefinitionNode;"
            ),
            "typedef ExecutableDefinitionNode = BaseNode; /* OperationDefinitionNode | FragmentDefinitionNode; */"
        );
    }

    #[test]
    fn single_line_union_ignores_string_literals() {
        let text = "typedef OperationTypeNode = 'query' | 'mutation';";
        assert_eq!(apply(Rule::SingleLineUnion, text), text);
    }

    #[test]
    fn type_node_union() {
        assert_eq!(
            apply(Rule::TypeNodeUnion, "  type: NamedTypeNode | ListTypeNode,"),
            "  type: TypeNode /* NamedTypeNode | ListTypeNode */,"
        );
    }

    #[test]
    fn superseded_type_node() {
        assert_eq!(
            apply(
                Rule::SupersededTypeNode,
                "typedef /* export type */ TypeNode = BaseNode;\ntypedef /* export type */ NamedTypeNode = {"
            ),
            "// typedef /* export type */ TypeNode = BaseNode;\ntypedef /* export type */ NamedTypeNode = {"
        );
    }

    #[test]
    fn nullable_token_only_rewrites_fields() {
        assert_eq!(
            apply(Rule::NullableToken, "  prev: Token | null,\n  next: Token | null,"),
            "  ?prev: Null<Token>,\n  ?next: Null<Token>,"
        );
        let top_level = "next: Token | null";
        assert_eq!(apply(Rule::NullableToken, top_level), top_level);
    }

    #[test]
    fn optional_value() {
        assert_eq!(
            apply(Rule::OptionalValue, "  value:String | void,"),
            "  ?value:Null<String>,"
        );
        // Only matches once primitives have been normalized.
        let raw = "  value: string | void,";
        assert_eq!(apply(Rule::OptionalValue, raw), raw);
    }

    #[test]
    fn import_type() {
        assert_eq!(
            apply(Rule::ImportType, "import type { Source } from './source';\nimport { x } from 'y';"),
            "// import type { Source } from './source';\nimport { x } from 'y';"
        );
    }

    #[test]
    fn kind_literal() {
        assert_eq!(apply(Rule::KindLiteral, "kind: 'Field',"), "kind: String, // 'Field'");
        assert_eq!(
            apply(Rule::KindLiteral, "  kind: 'Name';\n"),
            "  kind: String, // 'Name'\n"
        );
    }

    #[test]
    fn kind_literal_is_idempotent() {
        let once = apply(Rule::KindLiteral, "kind: 'Field',");
        assert_eq!(apply(Rule::KindLiteral, &once), once);
    }

    #[test]
    fn read_only_array() {
        assert_eq!(
            apply(Rule::ReadOnlyArray, "  definitions: $ReadOnlyArray<DefinitionNode>,"),
            "  definitions: /* $ReadOnlyArray */Array<DefinitionNode>,"
        );
    }

    #[test]
    fn read_only_array_is_not_idempotent() {
        let once = apply(Rule::ReadOnlyArray, "$ReadOnlyArray<A>");
        let twice = apply(Rule::ReadOnlyArray, &once);
        assert_ne!(once, twice);
        assert_eq!(twice, "/* /* $ReadOnlyArray */Array */Array<A>");
    }

    #[test]
    fn operation_type() {
        let text = "typedef /* export type */ OperationTypeNode = 'query' | 'mutation' | 'subscription';\n";
        let expected = "//  typedef /* export type */ OperationTypeNode = 'query' | 'mutation' | 'subscription'; \n\
@:enum abstract OperationTypeNode(String) to String from String {\n  \
var QUERY = 'query';\n  \
var MUTATION = 'mutation';\n  \
var SUBSCRIPTION = 'subscription'; // experimental non-spec\n\
}\n\n";
        assert_eq!(apply(Rule::OperationType, text), expected);
    }

    #[test]
    fn operation_type_leaves_fields_alone() {
        let text = "  operation: OperationTypeNode,";
        assert_eq!(apply(Rule::OperationType, text), text);
    }

    #[test]
    fn counts_matches() {
        let rule = Rule::Primitives.compile().unwrap();
        let (_, count) = rule.apply_counted("a: string, b: string, c: number".to_string());
        assert_eq!(count, 3);
        let (_, count) = rule.apply_counted("nothing".to_string());
        assert_eq!(count, 0);
    }
}
