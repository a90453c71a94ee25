use serde::{Deserialize, Serialize};

/// Preferred side for the step tooltip, relative to the highlighted element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

/// UI language key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ru,
    En,
}

/// A piece of text in both supported languages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Localized {
    pub ru: String,
    pub en: String,
}

impl Localized {
    pub fn new(ru: &str, en: &str) -> Self {
        Self {
            ru: ru.to_string(),
            en: en.to_string(),
        }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Ru => &self.ru,
            Lang::En => &self.en,
        }
    }
}

/// One stop of the onboarding walkthrough
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourStep {
    /// Selector of the highlighted element; `None` is the whole-page
    /// sentinel (centered tooltip, no spotlight)
    pub target: Option<String>,
    pub title: Localized,
    pub body: Localized,
    pub placement: Placement,
}

impl TourStep {
    pub fn new(target: Option<&str>, title: Localized, body: Localized, placement: Placement) -> Self {
        Self {
            target: target.map(str::to_string),
            title,
            body,
            placement,
        }
    }
}

/// The walkthrough shipped with the app
pub fn default_steps() -> Vec<TourStep> {
    vec![
        TourStep::new(
            None,
            Localized::new("Добро пожаловать!", "Welcome!"),
            Localized::new(
                "Давайте пройдем короткий тур по приложению Экопатруль.",
                "Let's take a short tour of the EcoPatrol app.",
            ),
            Placement::Center,
        ),
        TourStep::new(
            Some("#map"),
            Localized::new("Карта загрязнений", "Pollution Map"),
            Localized::new(
                "Здесь вы видите все отмеченные загрязнения в городе. Вы можете перемещать и масштабировать карту.",
                "Here you see all reported pollutions in the city. You can move and zoom the map.",
            ),
            Placement::Bottom,
        ),
        TourStep::new(
            Some("#add-pollution-btn"),
            Localized::new("Добавить отчет", "Add Report"),
            Localized::new(
                "Нажмите сюда, чтобы сообщить о новом загрязнении. Сфотографируйте и укажите место.",
                "Click here to report new pollution. Take a photo and specify the location.",
            ),
            Placement::Top,
        ),
        TourStep::new(
            Some("#air-widget-container"),
            Localized::new("Качество воздуха", "Air Quality"),
            Localized::new(
                "Следите за состоянием воздуха в вашем районе в режиме реального времени.",
                "Monitor air quality in your area in real-time.",
            ),
            Placement::Bottom,
        ),
        TourStep::new(
            Some("#profile-btn"),
            Localized::new("Ваш профиль", "Your Profile"),
            Localized::new(
                "Здесь вы можете увидеть свой баланс, историю отчетов и сменить язык.",
                "Here you can see your balance, report history, and change the language.",
            ),
            Placement::Left,
        ),
        TourStep::new(
            Some(".balance-display"),
            Localized::new("Награды", "Rewards"),
            Localized::new(
                "За каждое подтвержденное сообщение и очистку вы получаете эко-коины!",
                "For every confirmed report and cleanup, you receive eco-coins!",
            ),
            Placement::Bottom,
        ),
    ]
}
