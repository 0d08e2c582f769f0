//! Built-in functions.

use super::FunctionDoc;

const fn f(name: &'static str, signature: &'static str, doc: &'static str) -> FunctionDoc {
    FunctionDoc {
        name,
        signature,
        doc,
    }
}

/// Built-in functions, grouped by module.
pub static FUNCTIONS: &[FunctionDoc] = &[
    // list/
    f("list/map", "(a -> b) -> list a -> list b", "Apply a function to every element of a list."),
    f("list/filter", "(a -> bool) -> list a -> list a", "Keep the elements for which the predicate returns `#true`."),
    f("list/fold", "b -> (b -> a -> b) -> list a -> b", "Reduce a list from the left with an accumulator."),
    f("list/length", "list a -> int", "Number of elements in a list."),
    f("list/first", "list a -> maybe a", "First element of a list, or `#none` if it is empty."),
    f("list/rest", "list a -> list a", "Every element but the first."),
    f("list/reverse", "list a -> list a", "Elements in reverse order."),
    f("list/append", "list a -> list a -> list a", "Concatenate two lists."),
    f("list/range", "int -> int -> list int", "Integers from the first bound up to, but excluding, the second."),
    f("list/repeat", "int -> a -> list a", "A list holding the same value `n` times."),
    f("list/zip", "list a -> list b -> list { fst : a, snd : b }", "Pair up the elements of two lists."),
    // maybe/
    f("maybe/map", "(a -> b) -> maybe a -> maybe b", "Transform the value inside `#some`; `#none` passes through."),
    f("maybe/default", "a -> maybe a -> a", "The value inside `#some`, or the default for `#none`."),
    f("maybe/and-then", "(a -> maybe b) -> maybe a -> maybe b", "Chain a computation that may produce nothing."),
    // result/
    f("result/map", "(a -> b) -> result e a -> result e b", "Transform the value inside `#ok`; `#error` passes through."),
    f("result/map-error", "(e -> f) -> result e a -> result f a", "Transform the value inside `#error`."),
    f("result/default", "a -> result e a -> a", "The value inside `#ok`, or the default for `#error`."),
    f("result/and-then", "(a -> result e b) -> result e a -> result e b", "Chain a computation that may fail."),
    // text/
    f("text/length", "text -> int", "Number of characters in a text."),
    f("text/concat", "list text -> text", "Join a list of texts."),
    f("text/split", "text -> text -> list text", "Split a text on a separator."),
    f("text/join", "text -> list text -> text", "Join a list of texts with a separator."),
    f("text/to-list", "text -> list text", "The characters of a text."),
    f("text/repeat", "int -> text -> text", "A text repeated `n` times."),
    // bytes/
    f("bytes/length", "bytes -> int", "Number of bytes."),
    f("bytes/to-utf8-text", "bytes -> text", "Decode UTF-8 bytes as text."),
    f("bytes/from-utf8-text", "text -> bytes", "Encode text as UTF-8 bytes."),
    f("bytes/to-list", "bytes -> list int", "The byte values as integers."),
    // dict/
    f("dict/get", "text -> dict a -> maybe a", "Look up a key."),
    f("dict/set", "text -> a -> dict a -> dict a", "Insert or replace a key."),
    f("dict/remove", "text -> dict a -> dict a", "Remove a key."),
    f("dict/keys", "dict a -> list text", "All keys."),
    f("dict/values", "dict a -> list a", "All values."),
    // io/
    f("io/print", "text -> ()", "Write a line to standard output."),
    f("io/read", "() -> text", "Read a line from standard input."),
    f("io/now", "() -> int", "Current time in seconds since the epoch."),
    // remote/
    f("remote/fetch", "text -> result text bytes", "Fetch the contents of a URL."),
    f("remote/resolve", "text -> result text a", "Resolve a value by its hash from the scrap yard."),
    // conversions
    f("to-float", "int -> float", "Convert an integer to a float."),
    f("round", "float -> int", "Round to the nearest integer."),
    f("ceil", "float -> int", "Round up."),
    f("floor", "float -> int", "Round down."),
    f("abs", "int -> int", "Absolute value."),
    f("min", "int -> int -> int", "The smaller of two numbers."),
    f("max", "int -> int -> int", "The larger of two numbers."),
];
