//! Localized user-facing strings, one table per page.
//!
//! The header is authored in every supported language. All other pages are
//! authored in English and Chinese; the resolver serves English for the rest.

use crate::i18n::resolver::{PageBundle, PageId};
use crate::i18n::Language;
use crate::routes::Route;
use serde::Serialize;

// ==================== Header ====================

#[derive(Debug, Clone, Serialize)]
pub struct HeaderStrings {
    /// Product name shown next to the language selector
    pub title: &'static str,
}

pub const HEADER_EN: HeaderStrings = HeaderStrings {
    title: "AI Glasses Agent",
};
pub const HEADER_ZH: HeaderStrings = HeaderStrings { title: "AI智能眼镜" };
pub const HEADER_ES: HeaderStrings = HeaderStrings { title: "Gafas AI" };
pub const HEADER_FR: HeaderStrings = HeaderStrings {
    title: "Lunettes IA",
};
pub const HEADER_DE: HeaderStrings = HeaderStrings { title: "KI-Brille" };
pub const HEADER_JA: HeaderStrings = HeaderStrings { title: "AIグラス" };
pub const HEADER_KO: HeaderStrings = HeaderStrings { title: "AI 안경" };

impl PageBundle for HeaderStrings {
    const PAGE: PageId = PageId::Header;

    fn authored(language: Language) -> Option<&'static Self> {
        match language {
            Language::ENGLISH => Some(&HEADER_EN),
            Language::CHINESE => Some(&HEADER_ZH),
            Language::SPANISH => Some(&HEADER_ES),
            Language::FRENCH => Some(&HEADER_FR),
            Language::GERMAN => Some(&HEADER_DE),
            Language::JAPANESE => Some(&HEADER_JA),
            Language::KOREAN => Some(&HEADER_KO),
            _ => None,
        }
    }

    fn default_bundle() -> &'static Self {
        &HEADER_EN
    }

    fn fields(&self) -> Vec<(&'static str, &'static str)> {
        vec![("title", self.title)]
    }
}

// ==================== Home ====================

/// One application card on the home page
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStrings {
    pub route: Route,
    pub title: &'static str,
    pub description: &'static str,
    /// Longer text shown when hovering the card
    pub details: &'static str,
}

/// One step of the "How It Works" section
#[derive(Debug, Clone, Serialize)]
pub struct StepStrings {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeStrings {
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub get_started: &'static str,
    pub learn_more: &'static str,
    pub applications_title: &'static str,
    pub applications_subtitle: &'static str,
    pub try_now: &'static str,
    pub applications: [ApplicationStrings; 4],
    pub how_it_works_title: &'static str,
    pub how_it_works_subtitle: &'static str,
    pub steps: [StepStrings; 3],
}

pub const HOME_EN: HomeStrings = HomeStrings {
    hero_title: "Welcome to AI Glasses Agent",
    hero_subtitle: "Intelligent applications that transform your world. Explore the future of AI-powered visual assistance.",
    get_started: "Get Started",
    learn_more: "Learn More",
    applications_title: "AI Glasses Applications",
    applications_subtitle: "Explore our suite of AI-powered smart glasses applications",
    try_now: "Try Now",
    applications: [
        ApplicationStrings {
            route: Route::Translate,
            title: "Educational Translation",
            description: "Point at objects to get instant translations in your preferred language",
            details: "Utilize advanced AI to recognize and translate text in real-time. Support for multiple languages makes learning and communication effortless. Perfect for travel, education, and business.",
        },
        ApplicationStrings {
            route: Route::Health,
            title: "Health Tracking",
            description: "Track your meals and calories with smart food recognition",
            details: "Smart food recognition with automatic calorie calculation. Track eating habits and generate personalized health reports. Supports various food types and nutrition databases.",
        },
        ApplicationStrings {
            route: Route::Navigation,
            title: "Navigation Assistant",
            description: "Real-time navigation assistance for the visually impaired",
            details: "Provide real-time environment description and navigation guidance for the visually impaired. Smart obstacle detection with clear voice prompts. Ensure safe and independent mobility.",
        },
        ApplicationStrings {
            route: Route::About,
            title: "About Project",
            description: "Learn more about the AI Glasses Agent project",
            details: "Learn about our technological innovations and mission. Explore how AI glasses transform lives and join our open-source community.",
        },
    ],
    how_it_works_title: "How It Works",
    how_it_works_subtitle: "Discover how AI Glasses transform your daily experiences",
    steps: [
        StepStrings {
            title: "Wear Smart Glasses",
            description: "Simply put on the smart glasses and launch the app to begin your enhanced experience",
        },
        StepStrings {
            title: "Real-time AI Processing",
            description: "AI processes visual information in real-time, providing instant feedback and smart suggestions",
        },
        StepStrings {
            title: "Enjoy Smart Living",
            description: "Get real-time translations, health tracking, and navigation assistance to enhance your lifestyle",
        },
    ],
};

pub const HOME_ZH: HomeStrings = HomeStrings {
    hero_title: "欢迎使用AI智能眼镜",
    hero_subtitle: "智能应用，改变生活方式。探索AI驱动的视觉辅助新世界。",
    get_started: "立即开始",
    learn_more: "了解更多",
    applications_title: "AI智能眼镜应用",
    applications_subtitle: "探索我们的AI智能眼镜应用套件",
    try_now: "立即体验",
    applications: [
        ApplicationStrings {
            route: Route::Translate,
            title: "教育翻译助手",
            description: "指向物体即可获得实时翻译",
            details: "使用先进的AI技术，实时识别和翻译文本。支持多种语言，让学习和交流变得更加便捷。适用于旅行、学习和商务场景。",
        },
        ApplicationStrings {
            route: Route::Health,
            title: "健康追踪",
            description: "通过智能食物识别追踪卡路里",
            details: "智能识别食物，自动计算卡路里。追踪饮食习惯，生成个性化健康报告。支持多种食物类型和营养数据库。",
        },
        ApplicationStrings {
            route: Route::Navigation,
            title: "导航助手",
            description: "为视障人士提供实时导航辅助",
            details: "为视障人士提供实时环境描述和导航指引。智能识别障碍物，提供清晰的语音提示。确保安全和独立的出行体验。",
        },
        ApplicationStrings {
            route: Route::About,
            title: "关于项目",
            description: "了解更多关于AI智能眼镜项目",
            details: "了解我们的技术创新和使命愿景。探索AI眼镜如何改变生活，参与开源社区建设。",
        },
    ],
    how_it_works_title: "如何使用",
    how_it_works_subtitle: "探索AI智能眼镜如何改变您的日常生活体验",
    steps: [
        StepStrings {
            title: "佩戴智能眼镜",
            description: "轻松佩戴智能眼镜，启动应用程序，即刻开启智能生活",
        },
        StepStrings {
            title: "AI实时处理",
            description: "AI技术实时处理视觉信息，提供即时反馈和智能建议",
        },
        StepStrings {
            title: "享受智能生活",
            description: "获得实时翻译、健康追踪和导航辅助，提升生活品质",
        },
    ],
};

impl PageBundle for HomeStrings {
    const PAGE: PageId = PageId::Home;

    fn authored(language: Language) -> Option<&'static Self> {
        match language {
            Language::ENGLISH => Some(&HOME_EN),
            Language::CHINESE => Some(&HOME_ZH),
            _ => None,
        }
    }

    fn default_bundle() -> &'static Self {
        &HOME_EN
    }

    fn fields(&self) -> Vec<(&'static str, &'static str)> {
        let mut fields = vec![
            ("hero_title", self.hero_title),
            ("hero_subtitle", self.hero_subtitle),
            ("get_started", self.get_started),
            ("learn_more", self.learn_more),
            ("applications_title", self.applications_title),
            ("applications_subtitle", self.applications_subtitle),
            ("try_now", self.try_now),
            ("how_it_works_title", self.how_it_works_title),
            ("how_it_works_subtitle", self.how_it_works_subtitle),
        ];
        for app in &self.applications {
            fields.push(("applications.title", app.title));
            fields.push(("applications.description", app.description));
            fields.push(("applications.details", app.details));
        }
        for step in &self.steps {
            fields.push(("steps.title", step.title));
            fields.push(("steps.description", step.description));
        }
        fields
    }
}

// ==================== Translation page ====================

#[derive(Debug, Clone)]
pub struct TranslationStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub target_language_label: &'static str,
    pub upload_prompt: &'static str,
    pub choose_image: &'static str,
    pub translate_button: &'static str,
    pub result_label: &'static str,
    /// Shown when the backend call fails for any reason
    pub failure: &'static str,
}

pub const TRANSLATION_EN: TranslationStrings = TranslationStrings {
    title: "AI Translation Assistant",
    subtitle: "Point your camera at any text or object to get instant translations",
    target_language_label: "Select Target Language",
    upload_prompt: "Upload an image or take a photo",
    choose_image: "Choose Image",
    translate_button: "Translate",
    result_label: "Translation Result:",
    failure: "Failed to translate. Please try again.",
};

pub const TRANSLATION_ZH: TranslationStrings = TranslationStrings {
    title: "AI翻译助手",
    subtitle: "将相机对准任何文字或物体即可获得实时翻译",
    target_language_label: "选择目标语言",
    upload_prompt: "上传图片或拍照",
    choose_image: "选择图片",
    translate_button: "翻译",
    result_label: "翻译结果：",
    failure: "翻译失败，请重试。",
};

impl PageBundle for TranslationStrings {
    const PAGE: PageId = PageId::Translate;

    fn authored(language: Language) -> Option<&'static Self> {
        match language {
            Language::ENGLISH => Some(&TRANSLATION_EN),
            Language::CHINESE => Some(&TRANSLATION_ZH),
            _ => None,
        }
    }

    fn default_bundle() -> &'static Self {
        &TRANSLATION_EN
    }

    fn fields(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("title", self.title),
            ("subtitle", self.subtitle),
            ("target_language_label", self.target_language_label),
            ("upload_prompt", self.upload_prompt),
            ("choose_image", self.choose_image),
            ("translate_button", self.translate_button),
            ("result_label", self.result_label),
            ("failure", self.failure),
        ]
    }
}

// ==================== Calorie (health) page ====================

#[derive(Debug, Clone)]
pub struct CalorieStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub upload_prompt: &'static str,
    pub choose_image: &'static str,
    pub processing: &'static str,
    pub recent_meals: &'static str,
    pub calorie_trend: &'static str,
    pub calories_unit: &'static str,
    pub failure: &'static str,
}

pub const CALORIE_EN: CalorieStrings = CalorieStrings {
    title: "Calorie Tracking Assistant",
    subtitle: "Track your meals and calories with smart food recognition",
    upload_prompt: "Take a photo of your food",
    choose_image: "Choose Image",
    processing: "Processing your food image...",
    recent_meals: "Recent Meals",
    calorie_trend: "Calorie Trend",
    calories_unit: "kcal",
    failure: "Failed to recognize your meal. Please try again.",
};

pub const CALORIE_ZH: CalorieStrings = CalorieStrings {
    title: "卡路里追踪助手",
    subtitle: "使用智能食物识别追踪您的餐点和卡路里",
    upload_prompt: "拍摄您的食物照片",
    choose_image: "选择图片",
    processing: "正在处理您的食物图片...",
    recent_meals: "最近餐点",
    calorie_trend: "卡路里趋势",
    calories_unit: "千卡",
    failure: "食物识别失败，请重试。",
};

impl PageBundle for CalorieStrings {
    const PAGE: PageId = PageId::Health;

    fn authored(language: Language) -> Option<&'static Self> {
        match language {
            Language::ENGLISH => Some(&CALORIE_EN),
            Language::CHINESE => Some(&CALORIE_ZH),
            _ => None,
        }
    }

    fn default_bundle() -> &'static Self {
        &CALORIE_EN
    }

    fn fields(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("title", self.title),
            ("subtitle", self.subtitle),
            ("upload_prompt", self.upload_prompt),
            ("choose_image", self.choose_image),
            ("processing", self.processing),
            ("recent_meals", self.recent_meals),
            ("calorie_trend", self.calorie_trend),
            ("calories_unit", self.calories_unit),
            ("failure", self.failure),
        ]
    }
}

// ==================== Navigation page ====================

#[derive(Debug, Clone)]
pub struct NavigationStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub upload_prompt: &'static str,
    pub start_camera: &'static str,
    pub processing: &'static str,
    pub recent_alerts: &'static str,
    /// Direction shown when an alert carries a distance but no direction
    pub default_direction: &'static str,
    pub failure: &'static str,
}

pub const NAVIGATION_EN: NavigationStrings = NavigationStrings {
    title: "Navigation Assistant",
    subtitle: "Real-time navigation assistance for visually impaired users",
    upload_prompt: "Enable camera for real-time navigation",
    start_camera: "Start Camera",
    processing: "Processing environment...",
    recent_alerts: "Recent Alerts",
    default_direction: "ahead",
    failure: "Failed to process the environment. Please try again.",
};

pub const NAVIGATION_ZH: NavigationStrings = NavigationStrings {
    title: "导航助手",
    subtitle: "为视障人士提供实时导航辅助",
    upload_prompt: "启用相机进行实时导航",
    start_camera: "启动相机",
    processing: "正在处理环境...",
    recent_alerts: "最近提醒",
    default_direction: "前方",
    failure: "环境处理失败，请重试。",
};

impl PageBundle for NavigationStrings {
    const PAGE: PageId = PageId::Navigation;

    fn authored(language: Language) -> Option<&'static Self> {
        match language {
            Language::ENGLISH => Some(&NAVIGATION_EN),
            Language::CHINESE => Some(&NAVIGATION_ZH),
            _ => None,
        }
    }

    fn default_bundle() -> &'static Self {
        &NAVIGATION_EN
    }

    fn fields(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("title", self.title),
            ("subtitle", self.subtitle),
            ("upload_prompt", self.upload_prompt),
            ("start_camera", self.start_camera),
            ("processing", self.processing),
            ("recent_alerts", self.recent_alerts),
            ("default_direction", self.default_direction),
            ("failure", self.failure),
        ]
    }
}

// ==================== Navigation alert vocabulary ====================

/// Translations for values that arrive from the backend.
///
/// Lookups are exact; a value that is not listed is displayed as received.
#[derive(Debug, Clone)]
pub struct AlertVocabulary {
    pub alert_types: &'static [(&'static str, &'static str)],
    pub descriptions: &'static [(&'static str, &'static str)],
    pub directions: &'static [(&'static str, &'static str)],
}

impl AlertVocabulary {
    /// Display title for an alert type, with the first letter capitalized.
    pub fn alert_type_label(&self, alert_type: &str) -> String {
        capitalize(lookup(self.alert_types, alert_type))
    }

    pub fn description<'a>(&self, description: &'a str) -> &'a str {
        lookup(self.descriptions, description)
    }

    pub fn direction<'a>(&self, direction: &'a str) -> &'a str {
        lookup(self.directions, direction)
    }
}

fn lookup<'a>(table: &'static [(&'static str, &'static str)], raw: &'a str) -> &'a str {
    table
        .iter()
        .find(|(key, _)| *key == raw)
        .map(|(_, value)| *value)
        .unwrap_or(raw)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub const ALERTS_EN: AlertVocabulary = AlertVocabulary {
    alert_types: &[
        ("obstacle", "Obstacle"),
        ("warning", "Warning"),
        ("landmark", "Landmark"),
    ],
    descriptions: &[],
    directions: &[],
};

pub const ALERTS_ZH: AlertVocabulary = AlertVocabulary {
    alert_types: &[
        ("obstacle", "障碍物"),
        ("warning", "警告"),
        ("landmark", "地标"),
    ],
    descriptions: &[
        ("Door ahead", "前方有门"),
        ("Stairs approaching", "即将到达楼梯"),
        ("Open space ahead", "前方是开放空间"),
        ("Wall on the right", "右侧有墙"),
    ],
    directions: &[
        ("right", "右方"),
        ("left", "左方"),
        ("forward", "前方"),
        ("ahead", "前方"),
    ],
};

impl PageBundle for AlertVocabulary {
    const PAGE: PageId = PageId::AlertVocabulary;

    fn authored(language: Language) -> Option<&'static Self> {
        match language {
            Language::ENGLISH => Some(&ALERTS_EN),
            Language::CHINESE => Some(&ALERTS_ZH),
            _ => None,
        }
    }

    fn default_bundle() -> &'static Self {
        &ALERTS_EN
    }

    fn fields(&self) -> Vec<(&'static str, &'static str)> {
        let mut fields = Vec::new();
        fields.extend(self.alert_types.iter().map(|(_, v)| ("alert_types", *v)));
        fields.extend(self.descriptions.iter().map(|(_, v)| ("descriptions", *v)));
        fields.extend(self.directions.iter().map(|(_, v)| ("directions", *v)));
        fields
    }
}

// ==================== About page ====================

pub const GITHUB_URL: &str = "https://github.com/yourusername/ai-glasses-agent";
pub const WEBSITE_URL: &str = "https://ai-glasses-agent.com";
pub const CONTACT_URL: &str = "mailto:contact@ai-glasses-agent.com";

#[derive(Debug, Clone, Serialize)]
pub struct AboutStrings {
    pub title: &'static str,
    pub description: &'static str,
    pub overview_title: &'static str,
    pub overview_content: &'static str,
    pub features_title: &'static str,
    pub features: [&'static str; 3],
    pub technology_title: &'static str,
    pub technology_content: &'static str,
    pub commercial_title: &'static str,
    pub commercial_content: &'static str,
    pub commercial_uses: [&'static str; 3],
    pub contribute_title: &'static str,
    pub contribute_content: &'static str,
    pub github_label: &'static str,
    pub website_label: &'static str,
    pub contact_label: &'static str,
}

pub const ABOUT_EN: AboutStrings = AboutStrings {
    title: "About AI Glasses Agent",
    description: "An open-source project revolutionizing smart glasses applications",
    overview_title: "Project Overview",
    overview_content: "AI Glasses Agent is an innovative open-source platform that brings together cutting-edge AI technology and smart glasses hardware to create practical, everyday applications. Our mission is to make AI-powered visual assistance accessible to everyone.",
    features_title: "Key Features",
    features: [
        "Real-time translation assistance for educational purposes",
        "Smart calorie tracking and health monitoring",
        "Navigation assistance for visually impaired users",
    ],
    technology_title: "Technology Stack",
    technology_content: "Built with Rust on the client and FastAPI on the backend, the platform favors performance, type safety, and scalability. The modular architecture allows for easy integration of new features and AI models.",
    commercial_title: "Commercial Applications",
    commercial_content: "Our platform is designed for both individual users and enterprise applications. Potential commercial uses include:",
    commercial_uses: [
        "Educational institutions for language learning programs",
        "Healthcare facilities for dietary monitoring",
        "Assistive technology providers for vision assistance solutions",
    ],
    contribute_title: "Contribute",
    contribute_content: "We welcome contributions from developers, designers, and AI enthusiasts. Join us in making AI-powered visual assistance more accessible.",
    github_label: "GitHub",
    website_label: "Website",
    contact_label: "Contact",
};

pub const ABOUT_ZH: AboutStrings = AboutStrings {
    title: "关于AI智能眼镜",
    description: "革新智能眼镜应用的开源项目",
    overview_title: "项目概述",
    overview_content: "AI智能眼镜是一个创新的开源平台，将尖端AI技术与智能眼镜硬件相结合，创造实用的日常应用。我们的使命是让AI视觉辅助技术惠及每个人。",
    features_title: "核心功能",
    features: [
        "教育用途的实时翻译辅助",
        "智能卡路里追踪和健康监测",
        "视障人士导航辅助",
    ],
    technology_title: "技术栈",
    technology_content: "客户端使用Rust构建，后端使用FastAPI，我们的平台注重高性能、类型安全和可扩展性。模块化架构便于集成新功能和AI模型。",
    commercial_title: "商业应用",
    commercial_content: "我们的平台同时适用于个人用户和企业应用。潜在的商业用途包括：",
    commercial_uses: [
        "教育机构的语言学习项目",
        "医疗机构的饮食监测",
        "视觉辅助技术提供商的解决方案",
    ],
    contribute_title: "参与贡献",
    contribute_content: "我们欢迎开发者、设计师和AI爱好者的贡献。加入我们，让AI视觉辅助技术更加普及。",
    github_label: "GitHub",
    website_label: "网站",
    contact_label: "联系我们",
};

impl PageBundle for AboutStrings {
    const PAGE: PageId = PageId::About;

    fn authored(language: Language) -> Option<&'static Self> {
        match language {
            Language::ENGLISH => Some(&ABOUT_EN),
            Language::CHINESE => Some(&ABOUT_ZH),
            _ => None,
        }
    }

    fn default_bundle() -> &'static Self {
        &ABOUT_EN
    }

    fn fields(&self) -> Vec<(&'static str, &'static str)> {
        let mut fields = vec![
            ("title", self.title),
            ("description", self.description),
            ("overview_title", self.overview_title),
            ("overview_content", self.overview_content),
            ("features_title", self.features_title),
            ("technology_title", self.technology_title),
            ("technology_content", self.technology_content),
            ("commercial_title", self.commercial_title),
            ("commercial_content", self.commercial_content),
            ("contribute_title", self.contribute_title),
            ("contribute_content", self.contribute_content),
            ("github_label", self.github_label),
            ("website_label", self.website_label),
            ("contact_label", self.contact_label),
        ];
        fields.extend(self.features.iter().map(|f| ("features", *f)));
        fields.extend(self.commercial_uses.iter().map(|c| ("commercial_uses", *c)));
        fields
    }
}

// ==================== Errors ====================

/// Messages shared by every feature page.
#[derive(Debug, Clone)]
pub struct ErrorStrings {
    /// Prepended to every inline error line
    pub prefix: &'static str,
    pub no_image_selected: &'static str,
    /// Placeholders: {code}
    pub unsupported_language: &'static str,
    pub image_read: &'static str,
    pub request_in_flight: &'static str,
    pub cancelled: &'static str,
}

pub const ERRORS_EN: ErrorStrings = ErrorStrings {
    prefix: "Error: ",
    no_image_selected: "Please select an image first",
    unsupported_language: "Unsupported language: {code}",
    image_read: "Could not read the selected image",
    request_in_flight: "Please wait for the current request to finish",
    cancelled: "The request was cancelled",
};

pub const ERRORS_ZH: ErrorStrings = ErrorStrings {
    prefix: "错误：",
    no_image_selected: "请先选择图片",
    unsupported_language: "不支持的语言：{code}",
    image_read: "无法读取所选图片",
    request_in_flight: "请等待当前请求完成",
    cancelled: "请求已取消",
};

impl PageBundle for ErrorStrings {
    const PAGE: PageId = PageId::Errors;

    fn authored(language: Language) -> Option<&'static Self> {
        match language {
            Language::ENGLISH => Some(&ERRORS_EN),
            Language::CHINESE => Some(&ERRORS_ZH),
            _ => None,
        }
    }

    fn default_bundle() -> &'static Self {
        &ERRORS_EN
    }

    fn fields(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("prefix", self.prefix),
            ("no_image_selected", self.no_image_selected),
            ("unsupported_language", self.unsupported_language),
            ("image_read", self.image_read),
            ("request_in_flight", self.request_in_flight),
            ("cancelled", self.cancelled),
        ]
    }
}
