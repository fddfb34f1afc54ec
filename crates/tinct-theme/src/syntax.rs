// ABOUTME: Editor syntax-highlight themes: token rules plus editor chrome colors
// ABOUTME: Base rule sets per mode, with seed-tinted overrides for type tokens

use tinct_types::{Rgb, ThemeMode};

/// Tokens that get a seed-derived accent when a custom theme is generated.
const ACCENTED_TOKENS: [&str; 2] = ["type", "identifier"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Italic,
    Bold,
}

/// One token-to-color rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenRule {
    pub token: &'static str,
    pub foreground: Rgb,
    pub font_style: Option<FontStyle>,
}

impl TokenRule {
    const fn plain(token: &'static str, foreground: Rgb) -> Self {
        Self {
            token,
            foreground,
            font_style: None,
        }
    }

    const fn styled(token: &'static str, foreground: Rgb, style: FontStyle) -> Self {
        Self {
            token,
            foreground,
            font_style: Some(style),
        }
    }
}

/// Editor chrome colors that accompany the token rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorColors {
    pub foreground: Rgb,
    pub background: Rgb,
    pub line_highlight: Rgb,
    pub selection: Rgb,
}

/// A complete editor color theme.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTheme {
    pub rules: Vec<TokenRule>,
    pub colors: EditorColors,
}

impl SyntaxTheme {
    /// The hand-authored base rule set for a mode.
    pub fn base(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    fn light() -> Self {
        Self {
            rules: vec![
                TokenRule::styled("comment", Rgb::new(0x6b, 0x72, 0x80), FontStyle::Italic),
                TokenRule::plain("keyword", Rgb::new(0x7c, 0x3a, 0xed)),
                TokenRule::plain("string", Rgb::new(0x15, 0x80, 0x3d)),
                TokenRule::plain("number", Rgb::new(0xb4, 0x53, 0x09)),
                TokenRule::plain("type", Rgb::new(0x1d, 0x4e, 0xd8)),
                TokenRule::plain("identifier", Rgb::new(0x1f, 0x29, 0x37)),
                TokenRule::plain("function", Rgb::new(0x0e, 0x74, 0x90)),
                TokenRule::plain("constant", Rgb::new(0x9d, 0x17, 0x4d)),
                TokenRule::plain("operator", Rgb::new(0x4b, 0x55, 0x63)),
                TokenRule::plain("delimiter", Rgb::new(0x6b, 0x72, 0x80)),
            ],
            colors: EditorColors {
                foreground: Rgb::new(0x1f, 0x29, 0x37),
                background: Rgb::new(0xff, 0xff, 0xff),
                line_highlight: Rgb::new(0xf3, 0xf4, 0xf6),
                selection: Rgb::new(0xdb, 0xea, 0xfe),
            },
        }
    }

    fn dark() -> Self {
        Self {
            rules: vec![
                TokenRule::styled("comment", Rgb::new(0x9c, 0xa3, 0xaf), FontStyle::Italic),
                TokenRule::plain("keyword", Rgb::new(0xc4, 0xb5, 0xfd)),
                TokenRule::plain("string", Rgb::new(0x86, 0xef, 0xac)),
                TokenRule::plain("number", Rgb::new(0xfc, 0xd3, 0x4d)),
                TokenRule::plain("type", Rgb::new(0x93, 0xc5, 0xfd)),
                TokenRule::plain("identifier", Rgb::new(0xe5, 0xe7, 0xeb)),
                TokenRule::plain("function", Rgb::new(0x67, 0xe8, 0xf9)),
                TokenRule::plain("constant", Rgb::new(0xf9, 0xa8, 0xd4)),
                TokenRule::plain("operator", Rgb::new(0xd1, 0xd5, 0xdb)),
                TokenRule::plain("delimiter", Rgb::new(0x9c, 0xa3, 0xaf)),
            ],
            colors: EditorColors {
                foreground: Rgb::new(0xe5, 0xe7, 0xeb),
                background: Rgb::new(0x1f, 0x29, 0x37),
                line_highlight: Rgb::new(0x37, 0x41, 0x51),
                selection: Rgb::new(0x1e, 0x3a, 0x5f),
            },
        }
    }

    /// Re-tint the base rule set with a seed-derived accent.
    ///
    /// Type and identifier tokens take the accent; the editor foreground
    /// and background come from the generated text and paper colors. The
    /// remaining rules keep their base values.
    pub fn tinted(mode: ThemeMode, accent: Rgb, foreground: Rgb, background: Rgb) -> Self {
        let base = Self::base(mode);
        let rules = base
            .rules
            .into_iter()
            .map(|rule| {
                if ACCENTED_TOKENS.contains(&rule.token) {
                    TokenRule {
                        foreground: accent,
                        ..rule
                    }
                } else {
                    rule
                }
            })
            .collect();
        Self {
            rules,
            colors: EditorColors {
                foreground,
                background,
                ..base.colors
            },
        }
    }

    /// Look up the foreground for a token, if a rule exists.
    pub fn foreground_for(&self, token: &str) -> Option<Rgb> {
        self.rules
            .iter()
            .find(|rule| rule.token == token)
            .map(|rule| rule.foreground)
    }
}
