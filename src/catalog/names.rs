//! Tags, types, modules, record fields and pattern templates.

use super::{Entry, Snippet};

const fn e(name: &'static str, doc: &'static str) -> Entry {
    Entry { name, doc }
}

/// Common tags, without the leading `#`.
pub static TAGS: &[Entry] = &[
    e("true", "Boolean true."),
    e("false", "Boolean false."),
    e("some", "A present optional value: `#some x`."),
    e("none", "An absent optional value."),
    e("ok", "A successful result: `#ok value`."),
    e("error", "A failed result: `#error reason`."),
    e("left", "The left alternative of an either."),
    e("right", "The right alternative of an either."),
    e("pending", "Work that has not finished yet."),
    e("done", "Work that has finished."),
];

/// Built-in type names.
pub static TYPES: &[Entry] = &[
    e("int", "Arbitrary-precision integer."),
    e("float", "Floating point number."),
    e("text", "UTF-8 text."),
    e("bytes", "Sequence of bytes: `~~aGVsbG8=` or `~ff`."),
    e("bool", "`#true` or `#false`."),
    e("list", "Homogeneous list: `list int`."),
    e("record", "Named fields: `{ x : int, y : int }`."),
    e("maybe", "`#some a` or `#none`."),
    e("result", "`#ok a` or `#error e`."),
    e("dict", "Map from text keys to values."),
];

/// Importable modules.
pub static MODULES: &[Entry] = &[
    e("list", "Operations on lists."),
    e("maybe", "Optional values."),
    e("result", "Computations that may fail."),
    e("text", "Text manipulation."),
    e("bytes", "Byte strings and encodings."),
    e("dict", "Dictionaries keyed by text."),
    e("io", "Input and output effects."),
    e("remote", "Values fetched from elsewhere."),
];

/// Field names offered after `.`; there is no type-driven field inference.
pub static RECORD_FIELDS: &[Entry] = &[
    e("id", "Identifier."),
    e("name", "Name."),
    e("value", "Value."),
    e("type", "Kind of the record."),
    e("data", "Payload."),
    e("items", "Contained elements."),
    e("count", "Number of items."),
];

/// Pattern-matching templates, in the order they are offered.
pub static PATTERN_SNIPPETS: &[Snippet] = &[
    Snippet {
        label: "| pattern -> expression",
        insert_text: "| ${1:pattern} -> ${2:expression}",
        doc: "Basic pattern case.",
    },
    Snippet {
        label: "| _ -> default",
        insert_text: "| _ -> ${1:default}",
        doc: "Catch-all case matching any value.",
    },
    Snippet {
        label: "| [] -> empty",
        insert_text: "| [] -> ${1:empty}",
        doc: "Match the empty list.",
    },
    Snippet {
        label: "| [head, ..tail] -> expression",
        insert_text: "| [${1:head}, ..${2:tail}] -> ${3:expression}",
        doc: "Split a list into its first element and the rest.",
    },
    Snippet {
        label: "| [a, b] -> expression",
        insert_text: "| [${1:a}, ${2:b}] -> ${3:expression}",
        doc: "Match a list of exactly these elements.",
    },
    Snippet {
        label: "| { field = value } -> expression",
        insert_text: "| { ${1:field} = ${2:value} } -> ${3:expression}",
        doc: "Destructure a record.",
    },
    Snippet {
        label: "| #tag value -> expression",
        insert_text: "| #${1:tag} ${2:value} -> ${3:expression}",
        doc: "Match a tagged value.",
    },
    Snippet {
        label: "| x ? condition -> expression",
        insert_text: "| ${1:x} ? ${2:condition} -> ${3:expression}",
        doc: "Case that only matches when the guard holds.",
    },
    Snippet {
        label: "| 0 -> expression",
        insert_text: "| ${1:0} -> ${2:expression}",
        doc: "Match a literal number.",
    },
    Snippet {
        label: "| \"text\" -> expression",
        insert_text: "| \"${1:text}\" -> ${2:expression}",
        doc: "Match a literal text.",
    },
];

/// Template offered in a where clause.
pub static WHERE_SNIPPET: Snippet = Snippet {
    label: "; identifier = expression",
    insert_text: "; ${1:identifier} = ${2:expression}",
    doc: "Local binding scoped to the expression before it.",
};
