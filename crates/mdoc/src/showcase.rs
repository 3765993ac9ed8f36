//! Showcase document exercising every node kind.

use mdoc_builder::{Alignment, CodeLanguage, DocumentBuilder, ListBuilder, TableBuilder, markdown};

const REPO_URL: &str = "https://github.com/mdoc/mdoc";

/// Build the showcase document.
pub(crate) fn build(title: &str, numbered_headers: bool) -> DocumentBuilder {
    let mut builder = DocumentBuilder::new();
    builder.title(title).header_ordered(numbered_headers);

    builder
        .h1("Usage")
        .h1("API")
        .h2("Headers")
        .h2("Emphasis")
        .h3("bold")
        .h3("italic")
        .h3("bold-italic")
        .h2("Table")
        .h2("List")
        .h1("Output HTML")
        .new_line()
        .separator();

    add_emphasis(&mut builder);
    add_code(&mut builder);
    add_lists(&mut builder);
    add_tables(&mut builder);

    builder
        .link(REPO_URL)
        .new_line()
        .link_with_title(REPO_URL, "mdoc")
        .new_line()
        .image_with_description("https://octodex.github.com/images/minion.png", "Minion")
        .new_line()
        .image("https://octodex.github.com/images/stormtroopocat.jpg")
        .new_line();

    builder
}

fn add_emphasis(builder: &mut DocumentBuilder) {
    builder.bold("This is bold text").line_break();
    builder
        .text(markdown::italic("This is italic text"))
        .line_break();
    builder.bold_italic("This is bold-italic text").line_break();
    builder
        .strikethrough("This is strikethrough text")
        .line_break();

    builder.block_quote("Blockquotes demo").line_break();
    if let Some(nested) = markdown::composite_nodes([
        markdown::text("Blockquotes can also be nested..."),
        markdown::block_quote("nested blockquotes"),
    ]) {
        builder.block_quote(nested).line_break();
    }
}

fn add_code(builder: &mut DocumentBuilder) {
    builder
        .composite_nodes([markdown::text("Inline "), markdown::code("code")])
        .line_break();

    builder.code_block(
        CodeLanguage::Json,
        "{\n    \"name\": \"mdoc\",\n    \"repository\": \"https://github.com/mdoc/mdoc\"\n}",
    );
    builder.code_block(
        CodeLanguage::JavaScript,
        "var foo = function (bar) {\n  return bar++;\n};\n\nconsole.log(foo(5));",
    );
}

fn add_lists(builder: &mut DocumentBuilder) {
    builder.list(vec!["Java", "JavaScript", "TypeScript"]);
    builder
        .list(
            ListBuilder::new()
                .extend(["Java", "JavaScript", "TypeScript", "Misc"])
                .append(ListBuilder::new().extend(["a", "b", "c"])),
        )
        .line_break();

    builder.list(ListBuilder::from_items(
        ["Java", "JavaScript", "TypeScript"],
        true,
    ));
    builder.list(
        ListBuilder::from_items(["Java", "JavaScript", "TypeScript", "Misc"], true).append(
            ListBuilder::from_items(["a", "b", "c"], true)
                .append(ListBuilder::from_items(["x", "y", "z"], true)),
        ),
    );
}

fn add_tables(builder: &mut DocumentBuilder) {
    builder.table(
        TableBuilder::new(0, 2)
            .header(["Option", "Description"])
            .append_row([
                "data",
                "path to data files to supply the data that will be passed into templates.",
            ])
            .append_row([
                "engine",
                "engine to be used for processing templates. Handlebars is the default.",
            ])
            .append_row(["ext", "extension to be used for dest files."]),
    );

    let rich_description = markdown::composite_nodes([
        markdown::text("path to data files to supply the data that "),
        markdown::bold_italic("will be passed into templates."),
    ]);
    builder.table(
        TableBuilder::new(1, 2)
            .header(["Option", "Description"])
            .set_value(0, 0, "data")
            .set_value(0, 1, rich_description)
            .append_row([
                "engine",
                "engine to be used for processing templates. Handlebars is the default.",
            ])
            .append_row(["ext", "extension to be used for dest files."])
            .headers_align([Alignment::Middle, Alignment::Right]),
    );
}
