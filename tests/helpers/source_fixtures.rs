//! Common source code fixtures for tests.

pub const ARITHMETIC: &str = "1 + 2";

pub const THREE_DECLARATIONS: &str = "a = 1\nb = \"two\"\nc = [3]";

pub const MIXED_LIST: &str = "mixed = [1, \"text\", 3.14]";

pub const BROKEN_WHERE: &str = "; x = 10 + ;";

pub const FACTORIAL: &str = r#"
factorial =
  | 0 -> 1
  | n -> n * factorial (n - 1)
"#;

pub const WHERE_BLOCK: &str = r#"
area = width * height
; width = 10
; height = 20
"#;

pub const PIPELINE: &str = "total = [1, 2, 3] |> list/map (x -> x * 2) |> list/fold 0 add";

pub const RECORD: &str = "point = { x = 1, y = 2 }\nsum = point.x + point.y";
