//! The dark-mode option table, expressed against palette swatches.

use crate::schema::PaletteConfig;

/// A named base colour of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Bg,
    Fg,
    Selection,
    Comment,
    Red,
    Orange,
    Yellow,
    Green,
    Purple,
    Cyan,
    Pink,
    White,
}

impl Swatch {
    pub fn hex(self, palette: &PaletteConfig) -> &str {
        match self {
            Swatch::Bg => &palette.bg,
            Swatch::Fg => &palette.fg,
            Swatch::Selection => &palette.selection,
            Swatch::Comment => &palette.comment,
            Swatch::Red => &palette.red,
            Swatch::Orange => &palette.orange,
            Swatch::Yellow => &palette.yellow,
            Swatch::Green => &palette.green,
            Swatch::Purple => &palette.purple,
            Swatch::Cyan => &palette.cyan,
            Swatch::Pink => &palette.pink,
            Swatch::White => &palette.white,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// Swatch at an opacity percentage.
    Color(Swatch, i32),
    /// The configured monospace font, plain style.
    Font,
    Flag(bool),
}

const fn solid(swatch: Swatch) -> Setting {
    Setting::Color(swatch, 100)
}

const fn faded(swatch: Swatch, alpha: i32) -> Setting {
    Setting::Color(swatch, alpha)
}

use Swatch::*;

/// `(category, option path, setting)` rows, in write order.
///
/// Some Ghidra option names carry a trailing space; they are kept verbatim.
pub const DARK_TABLE: &[(&str, &str, Setting)] = &[
    ("Listing Fields", "Cursor Text Highlight.Highlight Color", solid(Selection)),
    ("Listing Fields", "Cursor Text Highlight.Scoped Write Highlight Color", solid(Selection)),
    ("Listing Fields", "Cursor Text Highlight.Scoped Read Highlight Color", solid(Selection)),
    ("Listing Fields", "Selection Colors.Selection Color", solid(Selection)),
    ("Listing Fields", "Selection Colors.Difference Color", solid(Selection)),
    ("Listing Fields", "Selection Colors.Highlight Color", solid(Selection)),
    ("Listing Fields", "Cursor.Cursor Color - Focused", solid(Fg)),
    ("Listing Fields", "Cursor.Cursor Color - Unfocused", faded(Selection, 40)),
    ("Listing Fields", "Cursor.Highlight Cursor Line Color", faded(Selection, 40)),
    ("Decompiler", "Display.Color for Keywords", solid(Pink)),
    ("Decompiler", "Display.Background Color", solid(Bg)),
    ("Decompiler", "Display.Color for Parameters", solid(Orange)),
    ("Decompiler", "Display.Color for Constants", solid(Purple)),
    ("Decompiler", "Display.Color for Current Variable Highlight", solid(Selection)),
    ("Decompiler", "Display.Color Default", solid(Fg)),
    ("Decompiler", "Display.Color for Types", solid(Cyan)),
    ("Decompiler", "Display.Color for Variables", solid(Fg)),
    ("Decompiler", "Display.Color for Comments", solid(Comment)),
    ("Decompiler", "Display.Color for Function names", solid(Green)),
    ("Decompiler", "Display.Font", Setting::Font),
    ("Graph", "Function Call Graph.Graph Background Color", solid(Comment)),
    ("Graph", "Function Graph.Default Vertex Color", solid(Bg)),
    ("Graph", "Function Graph.Graph Background Color", solid(Comment)),
    ("Graph", "Function Graph.Edge Color - Conditional Jump ", solid(Green)),
    ("Graph", "Function Graph.Edge Color - Conditional Jump Highlight", faded(Green, 50)),
    ("Graph", "Function Graph.Edge Color - Fallthrough ", solid(Yellow)),
    ("Graph", "Function Graph.Edge Color - Fallthrough Highlight", faded(Yellow, 50)),
    ("Graph", "Function Graph.Edge Color - Unconditional Jump ", solid(Cyan)),
    ("Graph", "Function Graph.Edge Color - Unconditional Jump Highlight", faded(Cyan, 50)),
    ("Search", "Highlight Color for Current Match", faded(Orange, 80)),
    ("Search", "Highlight Color", faded(White, 40)),
    ("Listing Display", "Background Color", solid(Bg)),
    ("Listing Display", "Mnemonic Color", solid(Fg)),
    ("Listing Display", "Bad Reference Address Color", solid(Red)),
    ("Listing Display", "XRef Write Color", solid(Red)),
    ("Listing Display", "Address Color", solid(Comment)),
    ("Listing Display", "Function Parameters Color", solid(Orange)),
    ("Listing Display", "Function Return Type Color", solid(Cyan)),
    ("Listing Display", "Comment, Referenced Repeatable Color", solid(Comment)),
    ("Listing Display", "Constant Color", solid(Purple)),
    ("Listing Display", "XRef Other Color", solid(Comment)),
    ("Listing Display", "EOL Comment Color", solid(Comment)),
    ("Listing Display", "Labels, Primary Color", solid(Pink)),
    ("Listing Display", "Function Tag Color", solid(Orange)),
    ("Listing Display", "Bytes Color", solid(Cyan)),
    ("Listing Display", "Post-Comment Color", solid(Comment)),
    ("Listing Display", "Function Call-Fixup Color", faded(Purple, 50)),
    ("Listing Display", "Plate Comment Color", solid(Comment)),
    ("Listing Display", "Labels, Unreferenced Color", faded(Red, 50)),
    ("Listing Display", "Entry Point Color", solid(Orange)),
    ("Listing Display", "Pre-Comment Color", solid(Comment)),
    ("Listing Display", "Mnemonic, Override Color", solid(Cyan)),
    ("Listing Display", "External Reference, Resolved Color", solid(Green)),
    ("Listing Display", "Parameter, Dynamic Storage Color", faded(Orange, 50)),
    ("Listing Display", "Parameter, Custom Storage Color", faded(Green, 50)),
    ("Listing Display", "Underline Color", faded(Purple, 50)),
    ("Listing Display", "Field Name Color", solid(Fg)),
    ("Listing Display", "XRef Read Color", solid(Cyan)),
    ("Listing Display", "Separator Color", solid(Fg)),
    ("Listing Display", "Version Track Color", faded(Purple, 50)),
    ("Listing Display", "Comment, Automatic Color", solid(Comment)),
    ("Listing Display", "XRef Color", solid(Green)),
    ("Listing Display", "Variable Color", solid(Fg)),
    ("Listing Display", "Flow Arrow, Active Color", faded(Green, 50)),
    ("Listing Display", "Flow Arrow, Not Active Color", faded(Red, 50)),
    ("Listing Display", "Labels, Local Color", solid(Cyan)),
    ("Listing Display", "Function Name Color", solid(Green)),
    ("Listing Display", "Comment, Repeatable Color", solid(Comment)),
    ("Listing Display", "BASE FONT", Setting::Font),
    ("Comments", "Enter accepts comment", Setting::Flag(true)),
];
