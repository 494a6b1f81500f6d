//! Built-in extension table.

/// `(category, [(subcategory, [extension, ...]), ...])` in lookup order.
pub(super) type Table = &'static [(&'static str, &'static [(&'static str, &'static [&'static str])])];

pub(super) const DEFAULT_TABLE: Table = &[
    (
        "media",
        &[
            ("disk", &["dmg", "iso", "toast", "vcd"]),
            (
                "audio",
                &["aif", "cda", "mid", "midi", "mp3", "mpa", "ogg", "wav", "wma", "wpl"],
            ),
        ],
    ),
    (
        "server",
        &[
            (
                "compressed",
                &["7z", "arj", "deb", "pkg", "rar", "rpm", "gz", "z", "zip"],
            ),
            (
                "executable",
                &["apk", "bat", "bin", "exe", "gadget", "jar", "wsf"],
            ),
            (
                "system",
                &[
                    "bak", "cab", "cfg", "cpl", "cur", "dll", "dmp", "drv", "icns", "ini", "lnk",
                    "msi", "sys", "tmp",
                ],
            ),
            (
                "database",
                &["csv", "dat", "db", "dbf", "log", "mdb", "sav", "sql", "tar", "xml"],
            ),
            (
                "programming",
                &["c", "class", "cpp", "cs", "h", "java", "sh", "swift", "vb"],
            ),
        ],
    ),
    (
        "internet",
        &[
            (
                "webpage",
                &[
                    "asp", "aspx", "cer", "cfm", "html", "htm", "jsp", "part", "php", "rss",
                    "xhtml",
                ],
            ),
            ("script", &["js", "json", "cgi", "pl", "py"]),
            ("style", &["css"]),
        ],
    ),
    (
        "graphics",
        &[
            ("font", &["fnt", "fon", "otf", "ttf"]),
            (
                "img",
                &[
                    "ai", "bmp", "gif", "ico", "jpeg", "jpg", "png", "ps", "psd", "svg", "tif",
                    "tiff",
                ],
            ),
            (
                "video",
                &[
                    "3g2", "3gp", "avi", "flv", "h264", "m4v", "mkv", "mov", "mp4", "mpg", "mpeg",
                    "rm", "swf", "vob", "wmv",
                ],
            ),
        ],
    ),
    (
        "display",
        &[
            ("presentation", &["key", "odp", "pps", "ppt", "pptx"]),
            ("spreadsheet", &["ods", "xlr", "xls", "xlsx"]),
            (
                "text",
                &["doc", "docx", "odt", "pdf", "rtf", "tex", "txt", "wks", "wps", "wpd"],
            ),
        ],
    ),
];
