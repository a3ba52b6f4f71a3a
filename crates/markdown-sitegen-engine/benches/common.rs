// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and `code`.\nSecond line of the paragraph.\n\n- Bullet point\n- Another [link](https://example.com)\n\n1. First\n2. Second\n\n> Quoted\n> text\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_text(spans: usize) -> String {
    let mut text = String::new();
    for i in 0..spans {
        text.push_str(&format!(
            "word {i} **bold {i}** then _it {i}_ and `c{i}` plus ![img {i}](/i/{i}.png) [l {i}](/p/{i}) "
        ));
    }
    text
}
