/// Builds a chat reply of roughly `sections` headed sections exercising every block kind.
pub fn generate_chat_content(sections: usize) -> String {
    let mut content = String::new();
    for i in 0..sections {
        content.push_str(&format!("## Section {i}\n\n"));
        content.push_str("Some **bold** text with `inline code` and a link to https://example.com/page.\n");
        content.push_str("A second line with *emphasis*, ~~strike~~ and [docs](https://example.com/docs).\n\n");
        content.push_str("- first item\n* second item\n+ third item\n\n");
        content.push_str("1. one\n2. two\n\n");
        content.push_str("> A quoted remark with <angle brackets> & ampersands.\n\n");
        content.push_str("```rust\nfn main() {\n    println!(\"hi\");\n}\n```\n\n---\n\n");
    }
    content
}
