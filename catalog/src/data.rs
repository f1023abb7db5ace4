//! Compiled-in catalog data.
//!
//! Every `ToolDescriptor::category` must name an entry of [`CATEGORIES`];
//! `data_test.rs` enforces that together with id uniqueness.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use crate::model::{CategoryDescriptor, ToolDescriptor};

pub const CATEGORIES: &[CategoryDescriptor] = &[
    CategoryDescriptor {
        id: "text",
        name: "Text Tools",
        description: "Count, transform, and compare plain text.",
        icon: "type",
        color: "blue",
    },
    CategoryDescriptor {
        id: "developer",
        name: "Developer Tools",
        description: "Format, minify, and inspect code and data.",
        icon: "code",
        color: "purple",
    },
    CategoryDescriptor {
        id: "encoders",
        name: "Encoders & Decoders",
        description: "Encode and decode strings for the web.",
        icon: "binary",
        color: "teal",
    },
    CategoryDescriptor {
        id: "converters",
        name: "Converters",
        description: "Convert between units, formats, and number systems.",
        icon: "repeat",
        color: "orange",
    },
    CategoryDescriptor {
        id: "generators",
        name: "Generators",
        description: "Generate identifiers, passwords, and placeholder content.",
        icon: "sparkles",
        color: "pink",
    },
    CategoryDescriptor {
        id: "calculators",
        name: "Calculators",
        description: "Everyday arithmetic for money, health, and dates.",
        icon: "calculator",
        color: "green",
    },
    CategoryDescriptor {
        id: "design",
        name: "Color & Design",
        description: "Pick, convert, and check colors.",
        icon: "palette",
        color: "red",
    },
    CategoryDescriptor {
        id: "security",
        name: "Security",
        description: "Hashes, tokens, and password checks.",
        icon: "shield",
        color: "slate",
    },
    CategoryDescriptor {
        id: "image",
        name: "Image Tools",
        description: "Resize, compress, and convert images in the browser.",
        icon: "image",
        color: "yellow",
    },
];

/// Shorthand for a catalog row; keeps the table below readable.
const fn tool(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    icon: &'static str,
    featured: bool,
    is_new: bool,
) -> ToolDescriptor {
    ToolDescriptor { id, name, description, category, icon, featured, is_new }
}

pub const TOOLS: &[ToolDescriptor] = &[
    // text
    tool("word-counter", "Word Counter", "Count words, characters, sentences, and reading time.", "text", "hash", true, false),
    tool("case-converter", "Case Converter", "Convert text between camelCase, snake_case, Title Case, and more.", "text", "case", true, false),
    tool("lorem-ipsum", "Lorem Ipsum Generator", "Generate placeholder paragraphs of lorem ipsum text.", "text", "align-left", false, false),
    tool("text-diff", "Text Diff", "Compare two texts and highlight the differences.", "text", "columns", false, true),
    tool("line-sorter", "Line Sorter", "Sort, deduplicate, and reverse lines of text.", "text", "list", false, false),
    tool("slug-generator", "Slug Generator", "Turn a title into a URL-friendly slug.", "text", "link", false, true),
    // developer
    tool("json-formatter", "JSON Formatter", "Pretty-print, minify, and validate JSON documents.", "developer", "braces", true, false),
    tool("markdown-previewer", "Markdown Previewer", "Render Markdown to HTML as you type.", "developer", "file-text", false, true),
    tool("html-minifier", "HTML Minifier", "Strip comments and whitespace from HTML.", "developer", "file-code", false, false),
    tool("css-minifier", "CSS Minifier", "Compress stylesheets by removing whitespace and comments.", "developer", "file-code", false, false),
    tool("js-beautifier", "JavaScript Beautifier", "Re-indent minified JavaScript.", "developer", "wand", false, false),
    tool("sql-formatter", "SQL Formatter", "Format SQL queries with consistent keywords and indentation.", "developer", "database", false, false),
    tool("regex-tester", "Regex Tester", "Test regular expressions against sample text.", "developer", "search", true, false),
    tool("cron-explainer", "Cron Explainer", "Describe a cron expression in plain English.", "developer", "clock", false, true),
    // encoders
    tool("base64-encoder", "Base64 Encoder / Decoder", "Encode text to Base64 and decode it back.", "encoders", "binary", true, false),
    tool("url-encoder", "URL Encoder / Decoder", "Percent-encode and decode URL components.", "encoders", "link", false, false),
    tool("html-entities", "HTML Entity Encoder", "Escape and unescape HTML entities.", "encoders", "code", false, false),
    tool("jwt-decoder", "JWT Decoder", "Decode the header and payload of a JSON Web Token.", "encoders", "key", false, true),
    // converters
    tool("unit-converter", "Unit Converter", "Convert length, mass, volume, and more.", "converters", "ruler", true, false),
    tool("temperature-converter", "Temperature Converter", "Convert between Celsius, Fahrenheit, and Kelvin.", "converters", "thermometer", false, false),
    tool("timestamp-converter", "Timestamp Converter", "Convert Unix timestamps to dates and back.", "converters", "clock", false, false),
    tool("number-base-converter", "Number Base Converter", "Convert numbers between binary, octal, decimal, and hex.", "converters", "binary", false, false),
    tool("roman-numeral-converter", "Roman Numeral Converter", "Convert between Roman numerals and integers.", "converters", "columns", false, false),
    tool("csv-json-converter", "CSV to JSON", "Convert CSV tables to JSON arrays and back.", "converters", "table", false, true),
    tool("yaml-json-converter", "YAML to JSON", "Convert YAML documents to JSON and back.", "converters", "repeat", false, false),
    // generators
    tool("uuid-generator", "UUID Generator", "Generate random version 4 UUIDs in bulk.", "generators", "fingerprint", true, false),
    tool("password-generator", "Password Generator", "Generate strong random passwords.", "generators", "lock", true, false),
    tool("qr-generator", "QR Code Generator", "Create QR codes for links and text.", "generators", "qr-code", true, true),
    tool("barcode-generator", "Barcode Generator", "Create printable barcodes.", "generators", "barcode", false, false),
    tool("fake-data-generator", "Fake Data Generator", "Generate sample names, emails, and addresses.", "generators", "users", false, true),
    // calculators
    tool("percentage-calculator", "Percentage Calculator", "Work out percentages, increases, and decreases.", "calculators", "percent", false, false),
    tool("bmi-calculator", "BMI Calculator", "Calculate body mass index from height and weight.", "calculators", "activity", false, false),
    tool("loan-calculator", "Loan Calculator", "Estimate monthly payments and total interest.", "calculators", "banknote", false, false),
    tool("age-calculator", "Age Calculator", "Calculate an exact age from a birth date.", "calculators", "cake", false, false),
    tool("tip-calculator", "Tip Calculator", "Split a bill and calculate the tip.", "calculators", "receipt", false, true),
    // design
    tool("color-converter", "Color Converter", "Convert colors between HEX, RGB, and HSL.", "design", "droplet", true, false),
    tool("gradient-generator", "Gradient Generator", "Build CSS gradients visually.", "design", "layers", false, false),
    tool("palette-generator", "Palette Generator", "Generate harmonious color palettes.", "design", "palette", false, true),
    tool("contrast-checker", "Contrast Checker", "Check WCAG contrast ratios between two colors.", "design", "eye", false, false),
    // security
    tool("hash-generator", "Hash Generator", "Compute SHA-256, SHA-384, and SHA-512 digests.", "security", "hash", true, false),
    tool("password-strength", "Password Strength Checker", "Estimate how hard a password is to guess.", "security", "shield", false, false),
    tool("htpasswd-generator", "Htpasswd Generator", "Create entries for Apache basic-auth files.", "security", "key", false, false),
    // image
    tool("image-resizer", "Image Resizer", "Resize images to exact dimensions.", "image", "maximize", false, false),
    tool("image-compressor", "Image Compressor", "Shrink JPEG and PNG files in the browser.", "image", "minimize", true, false),
    tool("favicon-generator", "Favicon Generator", "Create favicons from an image.", "image", "star", false, false),
    tool("image-to-base64", "Image to Base64", "Embed an image as a data URI.", "image", "file-image", false, true),
];
