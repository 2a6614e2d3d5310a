use crate::naming::dynamic_href;
use crate::types::{Language, PageData};
use maud::{Markup, html};

struct HomeCopy {
    headline: &'static str,
    lead: &'static str,
    cta_features: &'static str,
    cta_examples: &'static str,
    highlights_title: &'static str,
    highlights: [(&'static str, &'static str); 3],
    subprojects_title: &'static str,
    subprojects_lead: &'static str,
}

static EN: HomeCopy = HomeCopy {
    headline: "Render models, not boilerplate",
    lead: "model-renderer is a modular C++ engine for loading, processing and \
           drawing 3D models in real time on Vulkan.",
    cta_features: "Explore features",
    cta_examples: "See examples",
    highlights_title: "Why model-renderer",
    highlights: [
        (
            "Modular by design",
            "Graphics, import, task scheduling and math live in separate \
             libraries you can adopt one at a time.",
        ),
        (
            "Asynchronous loading",
            "Assets stream in on worker threads while the frame keeps rendering.",
        ),
        (
            "Modern GPU pipeline",
            "Bindless resources, indirect drawing and GPU-driven culling \
             out of the box.",
        ),
    ],
    subprojects_title: "Subprojects",
    subprojects_lead: "The engine is assembled from four independent libraries.",
};

static RU: HomeCopy = HomeCopy {
    headline: "Рисуйте модели, а не шаблонный код",
    lead: "model-renderer — модульный движок на C++ для загрузки, обработки и \
           отрисовки трёхмерных моделей в реальном времени на Vulkan.",
    cta_features: "Возможности",
    cta_examples: "Примеры",
    highlights_title: "Почему model-renderer",
    highlights: [
        (
            "Модульная архитектура",
            "Графика, импорт, планирование задач и математика вынесены в \
             отдельные библиотеки, которые можно подключать по одной.",
        ),
        (
            "Асинхронная загрузка",
            "Ресурсы загружаются в рабочих потоках, пока кадр продолжает рисоваться.",
        ),
        (
            "Современный GPU-конвейер",
            "Bindless-ресурсы, косвенная отрисовка и отсечение на GPU \
             из коробки.",
        ),
    ],
    subprojects_title: "Подпроекты",
    subprojects_lead: "Движок собран из четырёх независимых библиотек.",
};

const SUBPROJECTS: [(&str, &str, &str, &str); 4] = [
    (
        "/subprojects/mr-graphics",
        "mr-graphics",
        "Vulkan renderer",
        "Рендерер на Vulkan",
    ),
    (
        "/subprojects/mr-importer",
        "mr-importer",
        "Model and texture import",
        "Импорт моделей и текстур",
    ),
    (
        "/subprojects/mr-contractor",
        "mr-contractor",
        "Task graph scheduler",
        "Планировщик графа задач",
    ),
    (
        "/subprojects/mr-math",
        "mr-math",
        "SIMD linear algebra",
        "Линейная алгебра на SIMD",
    ),
];

pub fn render(data: &PageData<'_>) -> Markup {
    let lang = data.lang;
    let copy = match lang {
        Language::English => &EN,
        Language::Russian => &RU,
    };

    html! {
        section.hero {
            h1 { (copy.headline) }
            p.lead { (copy.lead) }
            div.hero-actions {
                a.button.primary href=(dynamic_href("/features", lang)) { (copy.cta_features) }
                a.button href=(dynamic_href("/examples", lang)) { (copy.cta_examples) }
            }
        }
        section.highlights {
            h2 { (copy.highlights_title) }
            div.card-grid {
                @for (title, text) in &copy.highlights {
                    article.card {
                        h3 { (title) }
                        p { (text) }
                    }
                }
            }
        }
        section.subprojects {
            h2 { (copy.subprojects_title) }
            p { (copy.subprojects_lead) }
            ul.subproject-list {
                @for (route, name, en, ru) in &SUBPROJECTS {
                    li {
                        a href=(dynamic_href(route, lang)) { code { (name) } }
                        " — "
                        @if lang.is_primary() { (en) } @else { (ru) }
                    }
                }
            }
        }
    }
}
