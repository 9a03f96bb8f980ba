//! Icon Catalog - category → subcategory → ordered icon names
//!
//! Declaration order is significant: it drives generation order, the
//! manifest layout and the type declarations.

use indexmap::IndexMap;

/// Subcategory name → icon names, in declaration order.
pub type Subcategories = IndexMap<String, Vec<String>>;

type StaticCategory = (&'static str, &'static [(&'static str, &'static [&'static str])]);

const BUILTIN: &[StaticCategory] = &[
    (
        "basic",
        &[
            (
                "direction",
                &[
                    "arrow-up", "arrow-down", "arrow-left", "arrow-right",
                    "caret-up", "caret-down", "caret-left", "caret-right",
                    "up", "down", "left", "right",
                    "expand", "collapse", "fullscreen", "fullscreen-exit",
                ],
            ),
            (
                "alert",
                &[
                    "info", "success", "warning", "error",
                    "question", "help", "notification", "message",
                ],
            ),
            (
                "action",
                &[
                    "add", "remove", "edit", "save", "delete", "copy", "cut", "paste",
                    "undo", "redo", "refresh", "reload", "sync", "download", "upload",
                ],
            ),
            (
                "media",
                &[
                    "play", "pause", "stop", "volume-up", "volume-down", "volume-mute",
                    "music", "video", "camera", "picture", "gallery",
                ],
            ),
            (
                "editor",
                &[
                    "bold", "italic", "underline", "strikethrough", "align-left",
                    "align-center", "align-right", "list-unordered", "list-ordered",
                ],
            ),
            (
                "data",
                &[
                    "chart-line", "chart-bar", "chart-pie", "chart-area", "table",
                    "database", "server", "cloud", "data-transfer",
                ],
            ),
            (
                "navigation",
                &[
                    "home", "menu", "settings", "user", "notification", "message",
                    "calendar", "clock", "history", "search", "filter",
                ],
            ),
            (
                "feedback",
                &[
                    "loading", "spinner", "progress", "success", "error", "warning",
                    "star", "heart", "thumb-up", "thumb-down", "smile", "frown",
                ],
            ),
        ],
    ),
    (
        "brand",
        &[
            (
                "social",
                &[
                    "wechat", "weibo", "qq", "douban", "zhihu", "tieba", "baidu",
                    "github", "gitee", "gitlab", "stackoverflow", "juejin", "segmentfault",
                ],
            ),
            ("payment", &["alipay", "wechat-pay", "unionpay"]),
            (
                "ecommerce",
                &["taobao", "tmall", "jd", "pinduoduo", "meituan", "dianping"],
            ),
            (
                "tech",
                &[
                    "vuejs", "react", "angular", "typescript", "javascript", "nodejs",
                    "python", "java", "go", "rust", "flutter", "taro", "uni-app",
                ],
            ),
        ],
    ),
    (
        "functional",
        &[
            (
                "file",
                &[
                    "file", "file-add", "file-remove", "file-edit", "file-copy",
                    "file-text", "file-image", "file-video", "file-audio", "file-pdf",
                    "folder", "folder-add", "folder-remove", "folder-open",
                ],
            ),
            (
                "setting",
                &[
                    "settings", "config", "gear", "tools", "user", "profile",
                    "security", "privacy", "notification", "theme",
                ],
            ),
            (
                "communication",
                &[
                    "phone", "mail", "message", "chat", "contacts", "groups",
                    "call", "video-call", "conference", "broadcast",
                ],
            ),
            (
                "geographic",
                &[
                    "location", "map", "pin", "marker", "flag", "compass",
                    "navigation", "route", "direction", "distance",
                ],
            ),
        ],
    ),
];

/// A single catalog row, as yielded by [`Catalog::entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<'a> {
    pub category: &'a str,
    pub subcategory: &'a str,
    pub icon_name: &'a str,
}

/// Order-preserving icon catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: IndexMap<String, Subcategories>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { categories: IndexMap::new() }
    }

    /// The catalog shipped with the generator.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (category, subcategories) in BUILTIN {
            for (subcategory, names) in subcategories.iter() {
                catalog.insert(category, subcategory, names.iter().copied());
            }
        }
        catalog
    }

    /// Append icon names to `category/subcategory`, creating either as needed.
    pub fn insert<I, S>(&mut self, category: &str, subcategory: &str, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories
            .entry(category.to_string())
            .or_default()
            .entry(subcategory.to_string())
            .or_default()
            .extend(names.into_iter().map(Into::into));
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Subcategories of `category`; `None` when the catalog does not know it.
    pub fn subcategories(&self, category: &str) -> Option<&Subcategories> {
        self.categories.get(category)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Every entry of `category` in declaration order. Unknown categories yield nothing.
    pub fn entries_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = CatalogEntry<'a>> {
        self.categories
            .get_key_value(category)
            .into_iter()
            .flat_map(|(category, subcategories)| {
                subcategories.iter().flat_map(move |(subcategory, names)| {
                    names.iter().map(move |icon_name| CatalogEntry {
                        category,
                        subcategory,
                        icon_name,
                    })
                })
            })
    }

    /// Every entry of the catalog in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry<'_>> {
        self.categories.keys().flat_map(move |c| self.entries_in(c))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
