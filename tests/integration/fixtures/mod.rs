// Gutenberg-style documents with known marker positions
// WHY: Deterministic input/output pairs for marker and header stripping checks

/// Licence preamble, marker line, then body
pub const ILIAD_TEXT: &str = "The Project Gutenberg eBook of The Iliad\n\
This eBook is for the use of anyone anywhere.\n\
\n\
*** START OF THE PROJECT GUTENBERG EBOOK THE ILIAD ***\n\
BOOK I.\n\
Sing, O goddess, the anger of Achilles son of Peleus.\n";

/// Character offset where the ILIAD_TEXT marker begins
pub const ILIAD_MARKER_START: usize = 88;

/// The marker line itself
pub const ILIAD_MARKER: &str = "*** START OF THE PROJECT GUTENBERG EBOOK THE ILIAD ***";

/// Body that follows the ILIAD_TEXT marker line
pub const ILIAD_BODY: &str = "BOOK I.\nSing, O goddess, the anger of Achilles son of Peleus.\n";

/// Windows line endings and a non-ASCII preamble
pub const FAUST_CRLF_TEXT: &str = "Übersetzung von Bayard Taylor\r\n*** START OF THE PROJECT GUTENBERG EBOOK FAUST ***\r\nPart One\r\n";

/// Document without any start marker
pub const NO_MARKER_TEXT: &str = "Just some text.\n*** END OF THE PROJECT GUTENBERG EBOOK ***\n";

/// Tweets for redaction checks
pub const TWEETS: &[(&str, &str)] = &[
    ("Hi @mgraffg!", "Hi @user!"),
    ("@_mgraffg @mgraffg_ @mgraffg_2 @mgraffg?", "@user @user @user @user?"),
    ("RT @nasa: launch at 9am @SpaceX_", "RT @user: launch at 9am @user"),
    ("no mentions at all", "no mentions at all"),
];
