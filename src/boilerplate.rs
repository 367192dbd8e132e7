/// Name of the generator, as written in the banner.
pub const GENERATOR: &str = "flow2hx";

/// Package declaration opening the generated module.
pub const PACKAGE_HEADER: &str = "package graphql;\n";

/// Hand-maintained definitions the generated typedefs refer to.
///
/// `BaseNode` is what every collapsed `Node` union turns into, and `TypeNode` is the structural stand-in for
/// `NamedTypeNode | ListTypeNode | NonNullTypeNode`. `TokenKind` and `Kind` mirror the string constants of
/// graphql-js, so callers narrow on `kind` by comparing against them.
pub const DEFINITIONS: &str = r#"typedef TokenKindEnum = TokenKind;

typedef Source = tink.parse.StringSlice;

typedef BaseNode = {
  kind:String,
  ?loc:Location
}

// Type nodes: one shape for NamedType, ListType and NonNullType
typedef TypeNode = { > BaseNode,
  // Optional, so consumers can null-check them:
  ?name: NameNode, // NamedTypeNode only
  ?type: TypeNode, // ListTypeNode and NonNullTypeNode only
}

// TokenKind
@:enum abstract TokenKind(String) to String from String {
  var SOF = '<SOF>';
  var EOF = '<EOF>';
  var BANG = '!';
  var DOLLAR = '$';
  var AMP = '&';
  var PAREN_L = '(';
  var PAREN_R = ')';
  var SPREAD = '...';
  var COLON = ':';
  var EQUALS = '=';
  var AT = '@';
  var BRACKET_L = '[';
  var BRACKET_R = ']';
  var BRACE_L = '{';
  var PIPE = '|';
  var BRACE_R = '}';
  var NAME = 'Name';
  var INT = 'Int';
  var FLOAT = 'Float';
  var STRING = 'String';
  var BLOCK_STRING = 'BlockString';
  var COMMENT = 'Comment';
}

// Kind
@:enum abstract Kind(String) to String from String {
  // Name
  var NAME = 'Name';

  // Document
  var DOCUMENT = 'Document';
  var OPERATION_DEFINITION = 'OperationDefinition';
  var VARIABLE_DEFINITION = 'VariableDefinition';
  var VARIABLE = 'Variable';
  var SELECTION_SET = 'SelectionSet';
  var FIELD = 'Field';
  var ARGUMENT = 'Argument';

  // Fragments
  var FRAGMENT_SPREAD = 'FragmentSpread';
  var INLINE_FRAGMENT = 'InlineFragment';
  var FRAGMENT_DEFINITION = 'FragmentDefinition';

  // Values
  var INT = 'IntValue';
  var FLOAT = 'FloatValue';
  var STRING = 'StringValue';
  var BOOLEAN = 'BooleanValue';
  var NULL = 'NullValue';
  var ENUM = 'EnumValue';
  var LIST = 'ListValue';
  var OBJECT = 'ObjectValue';
  var OBJECT_FIELD = 'ObjectField';

  // Directives
  var DIRECTIVE = 'Directive';

  // Types
  var NAMED_TYPE = 'NamedType';
  var LIST_TYPE = 'ListType';
  var NON_NULL_TYPE = 'NonNullType';

  // Type System Definitions
  var SCHEMA_DEFINITION = 'SchemaDefinition';
  var OPERATION_TYPE_DEFINITION = 'OperationTypeDefinition';

  // Type Definitions
  var SCALAR_TYPE_DEFINITION = 'ScalarTypeDefinition';
  var OBJECT_TYPE_DEFINITION = 'ObjectTypeDefinition';
  var FIELD_DEFINITION = 'FieldDefinition';
  var INPUT_VALUE_DEFINITION = 'InputValueDefinition';
  var INTERFACE_TYPE_DEFINITION = 'InterfaceTypeDefinition';
  var UNION_TYPE_DEFINITION = 'UnionTypeDefinition';
  var ENUM_TYPE_DEFINITION = 'EnumTypeDefinition';
  var ENUM_VALUE_DEFINITION = 'EnumValueDefinition';
  var INPUT_OBJECT_TYPE_DEFINITION = 'InputObjectTypeDefinition';

  // Type Extensions
  var SCALAR_TYPE_EXTENSION = 'ScalarTypeExtension';
  var OBJECT_TYPE_EXTENSION = 'ObjectTypeExtension';
  var INTERFACE_TYPE_EXTENSION = 'InterfaceTypeExtension';
  var UNION_TYPE_EXTENSION = 'UnionTypeExtension';
  var ENUM_TYPE_EXTENSION = 'EnumTypeExtension';
  var INPUT_OBJECT_TYPE_EXTENSION = 'InputObjectTypeExtension';

  // Directive Definitions
  var DIRECTIVE_DEFINITION = 'DirectiveDefinition';
}
"#;

/// Empty class so the module has a type matching its file name.
pub const PLACEHOLDER: &str = "class ASTDefs { }\n";

/// Enum abstract injected in place of the `OperationTypeNode` typedef.
pub const OPERATION_TYPE_ENUM: &str = "@:enum abstract OperationTypeNode(String) to String from String {
  var QUERY = 'query';
  var MUTATION = 'mutation';
  var SUBSCRIPTION = 'subscription'; // experimental non-spec
}
";

/// Trailer written after the translated text.
pub const EPILOGUE: &str = "\n\n";

/// The generated-file warning followed by the provenance comment for `source_url`.
pub fn banner(source_url: &str) -> String {
    let mut banner = String::new();
    for _ in 0..4 {
        banner.push_str(&format!("/* GENERATED BY {} -- DO NOT EDIT!!! */\n", GENERATOR));
    }
    banner.push_str("/* */\n");
    banner.push_str(&format!("/* based on: {} */\n", source_url));
    banner.push_str("/* */\n");
    banner
}

/// Wraps translated `body` text into the complete Haxe module.
pub fn assemble(source_url: &str, body: &str) -> String {
    let banner = banner(source_url);
    let parts: [&str; 10] = [
        PACKAGE_HEADER,
        "\n",
        &banner,
        "\n",
        DEFINITIONS,
        "\n",
        PLACEHOLDER,
        "\n",
        body,
        EPILOGUE,
    ];
    parts.concat()
}
