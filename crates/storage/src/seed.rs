//! The seed document.
//!
//! Installed when storage is empty and whenever the persisted document
//! fails to parse. The data mirrors the application's fixture set: a
//! three-seat team, two agents, twenty conversations spanning every
//! workflow state, three knowledge groups, and the model catalogue.

use mimic_core::{
    Account, Agent, ChatDetail, ChatStatus, ChatSummary, Document, KnowledgeFile, KnowledgeGroup,
    LlmModel, Message, ResourceId, Sender, TeamMember, TeamRole,
};
use std::collections::BTreeMap;

fn member(id: i64, name: &str, email: &str, role: TeamRole) -> TeamMember {
    TeamMember {
        id: ResourceId::Num(id),
        name: name.into(),
        email: email.into(),
        role,
        status: None,
    }
}

fn agent(id: i64, name: &str, model: &str, personality: &str, knowledge: i64) -> Agent {
    Agent {
        id: ResourceId::Num(id),
        name: name.into(),
        model: model.into(),
        personality: personality.into(),
        knowledge_ids: vec![ResourceId::Num(knowledge)],
        is_published: true,
        channels: vec!["web".into()],
    }
}

fn chat(
    id: i64,
    client: &str,
    last: &str,
    time: &str,
    status: ChatStatus,
    channel: &str,
) -> ChatSummary {
    ChatSummary {
        id: ResourceId::Num(id),
        client_name: client.into(),
        last_message: last.into(),
        time: time.into(),
        status,
        channels: vec![channel.into()],
    }
}

fn msg(sender: Sender, text: &str, time: &str) -> Message {
    Message {
        sender,
        text: text.into(),
        time: Some(time.into()),
    }
}

// System notices injected without a timestamp.
fn sys(text: &str) -> Message {
    Message {
        sender: Sender::System,
        text: text.into(),
        time: None,
    }
}

fn detail(id: i64, client: &str, channel: &str, messages: Vec<Message>) -> (String, ChatDetail) {
    (
        id.to_string(),
        ChatDetail {
            id: ResourceId::Num(id),
            client_name: client.into(),
            channels: vec![channel.into()],
            messages,
        },
    )
}

fn file(id: i64, kind: &str, name: &str, details: &str) -> KnowledgeFile {
    KnowledgeFile {
        id: ResourceId::Num(id),
        kind: kind.into(),
        name: name.into(),
        details: details.into(),
    }
}

fn group(id: i64, name: &str, description: &str, files: Vec<KnowledgeFile>) -> KnowledgeGroup {
    KnowledgeGroup {
        id: ResourceId::Num(id),
        name: name.into(),
        description: description.into(),
        files,
    }
}

fn model(id: &str, name: &str, description: &str, tags: &[&str]) -> LlmModel {
    LlmModel {
        id: ResourceId::Str(id.into()),
        name: name.into(),
        description: description.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Build a fresh copy of the seed document.
pub fn seed_document() -> Document {
    use ChatStatus::{Attention, Idle, Live, Paused, Resolved};
    use Sender::{Bot, Client, Operator};

    let chats = vec![
        chat(
            1,
            "Alice Johnson",
            "User is reporting an error after multiple attempts.",
            "2m ago",
            Attention,
            "web",
        ),
        chat(2, "Frank Miller", "I'M STUCK!! HELLO?!?", "5m ago", Attention, "telegram"),
        chat(
            3,
            "Grace Hopper",
            "This is unacceptable, I want a refund now.",
            "10m ago",
            Attention,
            "whatsapp",
        ),
        chat(
            4,
            "Oliver Twist",
            "My account is blocked and I can't access my funds!",
            "12m ago",
            Attention,
            "web",
        ),
        chat(
            5,
            "David Lee",
            "Agent: We ship worldwide. Where are you located?",
            "Just now",
            Live,
            "web",
        ),
        chat(
            6,
            "Diana Prince",
            "I have another question about my invoice.",
            "1m ago",
            Live,
            "telegram",
        ),
        chat(
            7,
            "Penelope Cruz",
            "Okay, I'm sending the screenshot now.",
            "3m ago",
            Live,
            "whatsapp",
        ),
        chat(
            8,
            "Quentin Crisp",
            "So, the new feature... how does it work exactly?",
            "7m ago",
            Live,
            "web",
        ),
        chat(
            9,
            "Steve Rogers",
            "The dev team is looking into this bug report.",
            "25m ago",
            Paused,
            "web",
        ),
        chat(
            10,
            "Tony Stark",
            "Our product team is reviewing your feature request.",
            "45m ago",
            Paused,
            "telegram",
        ),
        chat(
            11,
            "Natasha Romanoff",
            "We are still waiting for an update from the billing department.",
            "1h ago",
            Paused,
            "web",
        ),
        chat(
            12,
            "Bruce Banner",
            "I've escalated this to our senior engineers.",
            "3h ago",
            Paused,
            "whatsapp",
        ),
        chat(
            13,
            "Charlie Brown",
            "Just checking in to see if you had a chance to try the steps.",
            "5h ago",
            Idle,
            "web",
        ),
        chat(
            14,
            "Ivy Green",
            "Let me know when you've sent over the required documents.",
            "8h ago",
            Idle,
            "telegram",
        ),
        chat(
            15,
            "Jack White",
            "Is there anything else I can help you with today?",
            "1d ago",
            Idle,
            "web",
        ),
        chat(16, "Walter White", "Did that solution work for you?", "1d ago", Idle, "whatsapp"),
        chat(
            17,
            "Sophia Rodriguez",
            "Happy I could help! Have a great day.",
            "2d ago",
            Resolved,
            "web",
        ),
        chat(
            18,
            "Karen Page",
            "Your order has been successfully delivered. Enjoy!",
            "2d ago",
            Resolved,
            "telegram",
        ),
        chat(
            19,
            "Leo Fitz",
            "Perfect, that fixed it. Thanks so much!",
            "3d ago",
            Resolved,
            "web",
        ),
        chat(
            20,
            "Bruce Wayne",
            "The payment has gone through. Closing this ticket now.",
            "4d ago",
            Resolved,
            "whatsapp",
        ),
    ];

    let chat_details: BTreeMap<String, ChatDetail> = [
        detail(
            1,
            "Alice Johnson",
            "web",
            vec![
                msg(Bot, "Hello! How can I assist you today?", "10:00 AM"),
                msg(
                    Client,
                    "I'm having an issue with my account. I can't access it.",
                    "10:01 AM",
                ),
                sys("Negative sentiment detected. Operator notified."),
            ],
        ),
        detail(
            2,
            "Frank Miller",
            "telegram",
            vec![
                msg(Bot, "Hi! What can I do for you?", "9:45 AM"),
                msg(Client, "I'M STUCK!! HELLO?!?", "9:46 AM"),
            ],
        ),
        detail(
            3,
            "Grace Hopper",
            "whatsapp",
            vec![
                msg(Bot, "Welcome to support. How can I help?", "11:05 AM"),
                msg(
                    Client,
                    "My order arrived damaged. This is unacceptable, I want a refund now.",
                    "11:06 AM",
                ),
            ],
        ),
        detail(
            4,
            "Oliver Twist",
            "web",
            vec![msg(
                Client,
                "My account is blocked and I can't access my funds!",
                "1:15 PM",
            )],
        ),
        detail(
            5,
            "David Lee",
            "web",
            vec![
                msg(Client, "Do you ship to Australia?", "3:30 PM"),
                msg(Bot, "Agent: We ship worldwide. Where are you located?", "3:31 PM"),
            ],
        ),
        detail(
            6,
            "Diana Prince",
            "telegram",
            vec![
                msg(Bot, "Is there anything else I can assist you with?", "4:00 PM"),
                msg(Client, "Yes, I have another question about my invoice.", "4:01 PM"),
            ],
        ),
        detail(
            7,
            "Penelope Cruz",
            "whatsapp",
            vec![
                msg(
                    Operator,
                    "Could you please provide a screenshot of the error message?",
                    "4:15 PM",
                ),
                msg(Client, "Okay, I'm sending the screenshot now.", "4:16 PM"),
            ],
        ),
        detail(
            8,
            "Quentin Crisp",
            "web",
            vec![msg(
                Client,
                "So, the new feature... how does it work exactly?",
                "4:30 PM",
            )],
        ),
        detail(
            9,
            "Steve Rogers",
            "web",
            vec![
                msg(Client, "I think I found a bug in your payment form.", "5:00 PM"),
                msg(
                    Operator,
                    "Thank you for the report. The dev team is looking into this bug report.",
                    "5:05 PM",
                ),
            ],
        ),
        detail(
            10,
            "Tony Stark",
            "telegram",
            vec![
                msg(
                    Client,
                    "It would be great if you could add an integration with Figma.",
                    "5:20 PM",
                ),
                msg(
                    Operator,
                    "That's an excellent idea. Our product team is reviewing your feature request.",
                    "5:22 PM",
                ),
            ],
        ),
        detail(
            11,
            "Natasha Romanoff",
            "web",
            vec![
                msg(
                    Client,
                    "I was charged twice for my last subscription renewal.",
                    "5:40 PM",
                ),
                msg(
                    Operator,
                    "I'm very sorry to hear that. We are still waiting for an update from the billing department.",
                    "5:45 PM",
                ),
            ],
        ),
        detail(
            12,
            "Bruce Banner",
            "whatsapp",
            vec![
                msg(Client, "The entire site is down for me!", "6:00 PM"),
                msg(
                    Operator,
                    "This is a high‑priority issue. I've escalated this to our senior engineers.",
                    "6:01 PM",
                ),
            ],
        ),
        detail(
            13,
            "Charlie Brown",
            "web",
            vec![
                msg(
                    Operator,
                    "I've sent the password reset link to your email.",
                    "Yesterday",
                ),
                sys("24 hours passed. Sending follow‑up."),
                msg(
                    Bot,
                    "Just checking in to see if you had a chance to try the steps.",
                    "8:10 AM",
                ),
            ],
        ),
        detail(
            14,
            "Ivy Green",
            "telegram",
            vec![
                msg(
                    Operator,
                    "To process your request, I'll need a copy of your ID.",
                    "Yesterday",
                ),
                msg(
                    Bot,
                    "Let me know when you've sent over the required documents.",
                    "9:00 AM",
                ),
            ],
        ),
        detail(
            15,
            "Jack White",
            "web",
            vec![
                msg(Bot, "Your issue has been resolved.", "1d ago"),
                msg(Bot, "Is there anything else I can help you with today?", "1d ago"),
            ],
        ),
        detail(
            16,
            "Walter White",
            "whatsapp",
            vec![
                msg(
                    Operator,
                    "Try clearing your browser cache. That should fix it.",
                    "1d ago",
                ),
                msg(Bot, "Did that solution work for you?", "10:30 AM"),
            ],
        ),
        detail(
            17,
            "Sophia Rodriguez",
            "web",
            vec![
                msg(Client, "Thank you, it's working now!", "2d ago"),
                msg(Operator, "Happy I could help! Have a great day.", "2d ago"),
            ],
        ),
        detail(
            18,
            "Karen Page",
            "telegram",
            vec![
                msg(
                    Bot,
                    "Tracking shows your package was delivered at 2:15 PM.",
                    "2d ago",
                ),
                msg(Client, "Got it, thank you!", "2d ago"),
                msg(Bot, "Your order has been successfully delivered. Enjoy!", "2d ago"),
            ],
        ),
        detail(
            19,
            "Leo Fitz",
            "web",
            vec![
                msg(
                    Operator,
                    "Okay, I've manually refreshed your account data.",
                    "3d ago",
                ),
                msg(Client, "Perfect, that fixed it. Thanks so much!", "3d ago"),
            ],
        ),
        detail(
            20,
            "Bruce Wayne",
            "whatsapp",
            vec![
                msg(
                    Operator,
                    "We've resolved the issue with the payment gateway.",
                    "4d ago",
                ),
                msg(Client, "Confirmed, payment is successful.", "4d ago"),
                msg(
                    Operator,
                    "The payment has gone through. Closing this ticket now.",
                    "4d ago",
                ),
            ],
        ),
    ]
    .into_iter()
    .collect();

    Document {
        account: Account {
            name: "Tema".into(),
            email: "tema@wsl.ru".into(),
            plan: "Pro Plan".into(),
            team: vec![
                member(1, "Tema", "tema@wsl.ru", TeamRole::Owner),
                member(2, "Alex", "alex@example.com", TeamRole::Operator),
                member(3, "Sam", "sam@example.com", TeamRole::ReadOnly),
            ],
        },
        agents: vec![
            agent(1, "GuzziBot", "GPT-4o", "Formal", 10),
            agent(2, "ClientSupport", "Claude 3 Opus", "Friendly", 20),
        ],
        chats,
        chat_details,
        knowledge_groups: vec![
            group(
                10,
                "Product Manuals",
                "User guides and technical specifications for all products.",
                vec![
                    file(101, "pdf", "Pricing_FAQ.pdf", "2.1 MB"),
                    file(102, "url", "https://docs.trickster.dev", "Website sync"),
                ],
            ),
            group(
                20,
                "Internal Policies",
                "Company policies and procedures for internal use.",
                vec![file(201, "text", "Return Policy", "1.5 KB")],
            ),
            group(
                30,
                "Sales Scripts",
                "Scripts and talking points for the sales team.",
                vec![],
            ),
        ],
        llm_models: vec![
            model("gpt-4o", "GPT-4o", "The latest and most advanced model.", &["Top Choice"]),
            model(
                "claude-3-opus",
                "Claude 3 Opus",
                "Top-tier performance for long context.",
                &[],
            ),
        ],
    }
}
