// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\n\n- Bullet point\n  - Nested item\n- Another item\n\n1. First\n2. Second\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// One list nested `depth` levels deep, `width` items per level.
#[allow(dead_code)]
pub fn generate_nested_list(depth: usize, width: usize) -> String {
    let mut content = String::new();
    push_level(&mut content, 0, depth, width);
    content
}

fn push_level(content: &mut String, level: usize, depth: usize, width: usize) {
    if level == depth {
        return;
    }
    let indent = "  ".repeat(level);
    for i in 0..width {
        content.push_str(&format!("{indent}- Item {i} at level {level}\n"));
        if i == width - 1 {
            push_level(content, level + 1, depth, width);
        }
    }
}

/// Items separated by blank lines with continuation paragraphs.
#[allow(dead_code)]
pub fn generate_loose_list(items: usize) -> String {
    (0..items)
        .map(|i| format!("{}. Item {i}\n\n   Continuation paragraph for item {i}.\n\n", i + 1))
        .collect()
}
