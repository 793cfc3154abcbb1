// Shared by every bench target in this directory, which dead code analysis
// cannot see.
#[allow(dead_code)]
pub fn generate_wiki_page(size: usize) -> String {
    let base = "= Title\n\n== Section\n\nParagraph with ''bold'' text and a [[Folder/Page | link]].\n\n* Bullet point\n** Nested item\n[ ] tomorrow | open task\n\n{|\n|| Key || Value |-\n| a | {{color:red}}1{{/color}} |-\n|}\n\n@@|rust\nfn example() {}\n@@\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_tables(depth: usize) -> String {
    let mut page = String::new();
    for level in 0..depth {
        page.push_str(&format!("{{|\n| cell at level {level}\n"));
    }
    for _ in 0..depth {
        page.push_str("|}\n");
    }
    page
}
