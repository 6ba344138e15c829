//! Keyword responder.
//!
//! Maps a user message to one of four canned replies. The input is
//! lower-cased and checked against each [`Category`] in priority order;
//! the first category with a keyword contained in the input wins.
//! Matching is plain substring containment, so `"hi"` also fires on
//! `"this"`.

/// Reply for transaction and payment questions.
pub const TRANSACTION_REPLY: &str =
    "您好！我可以帮您查询交易记录和支付信息。请问您想查询哪个时间段的交易？";

/// Reply for balance questions. Carries the fixed demo figure.
pub const BALANCE_REPLY: &str =
    "您的当前余额是 ¥12,345.67。如需详细信息，请告诉我具体的账户名称。";

/// Capability menu returned for greetings and help requests.
pub const CAPABILITY_MENU: &str = "您好！我是智能支付助手，可以帮您：\n\
1. 查询交易记录\n\
2. 查看账户余额\n\
3. 分析消费趋势\n\
4. 提供支付建议\n\
\n\
请问有什么可以帮您？";

/// The demo balance figure embedded in [`BALANCE_REPLY`].
pub const DEMO_BALANCE: &str = "¥12,345.67";

/// Keyword category, listed in matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Transaction,
    Balance,
    Greeting,
    /// Nothing matched; the reply echoes the input.
    Fallback,
}

impl Category {
    /// Categories that own keywords, highest priority first.
    pub const MATCHED: [Category; 3] = [Category::Transaction, Category::Balance, Category::Greeting];

    /// Trigger substrings. Always lower-case.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Transaction => &["transaction", "payment", "交易", "支付"],
            Category::Balance => &["balance", "余额", "账户"],
            Category::Greeting => &["help", "hello", "hi", "帮助", "你好"],
            Category::Fallback => &[],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Transaction => "transaction",
            Category::Balance => "balance",
            Category::Greeting => "greeting",
            Category::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide which category a message falls into.
pub fn classify(input: &str) -> Category {
    let lowered = input.to_lowercase();
    Category::MATCHED
        .into_iter()
        .find(|category| category.keywords().iter().any(|kw| lowered.contains(kw)))
        .unwrap_or(Category::Fallback)
}

/// Produce the assistant reply for `input`.
///
/// Deterministic: the same input always yields the same reply.
pub fn generate(input: &str) -> String {
    reply_for(classify(input), input)
}

/// Render the reply text for an already-classified message.
pub fn reply_for(category: Category, input: &str) -> String {
    match category {
        Category::Transaction => TRANSACTION_REPLY.to_owned(),
        Category::Balance => BALANCE_REPLY.to_owned(),
        Category::Greeting => CAPABILITY_MENU.to_owned(),
        Category::Fallback => format!(
            "收到您的消息：「{input}」\n\n我是智能支付助手，可以帮您处理支付相关的问题。请尝试询问交易记录、账户余额等信息。"
        ),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
