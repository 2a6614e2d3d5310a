use crate::types::{Language, PageData};
use maud::{Markup, html};

struct Section {
    title: &'static str,
    items: &'static [(&'static str, &'static str)],
}

const EN: &[Section] = &[
    Section {
        title: "Rendering",
        items: &[
            (
                "Vulkan 1.3 backend",
                "Dynamic rendering and synchronization2, no legacy render passes.",
            ),
            (
                "Physically based shading",
                "Metal/roughness materials with image-based lighting.",
            ),
            (
                "GPU-driven culling",
                "Frustum and occlusion culling in compute, feeding indirect draws.",
            ),
        ],
    },
    Section {
        title: "Assets",
        items: &[
            (
                "glTF 2.0 import",
                "Meshes, materials and scene hierarchy straight from .gltf and .glb.",
            ),
            (
                "Mesh optimization",
                "Vertex cache and overdraw optimization with automatic LOD chains.",
            ),
            (
                "Texture compression",
                "Block-compressed textures generated at import time.",
            ),
        ],
    },
    Section {
        title: "Runtime",
        items: &[
            (
                "Task graph",
                "Loading and processing are expressed as dependent tasks run on a thread pool.",
            ),
            (
                "SIMD math",
                "Vectors, matrices and quaternions backed by SSE and AVX.",
            ),
        ],
    },
];

const RU: &[Section] = &[
    Section {
        title: "Отрисовка",
        items: &[
            (
                "Бэкенд Vulkan 1.3",
                "Динамический рендеринг и synchronization2, без устаревших проходов рендера.",
            ),
            (
                "Физически корректное освещение",
                "Материалы metal/roughness и освещение по окружению.",
            ),
            (
                "Отсечение на GPU",
                "Отсечение по пирамиде видимости и перекрытию в вычислительных шейдерах.",
            ),
        ],
    },
    Section {
        title: "Ресурсы",
        items: &[
            (
                "Импорт glTF 2.0",
                "Сетки, материалы и иерархия сцены напрямую из .gltf и .glb.",
            ),
            (
                "Оптимизация сеток",
                "Оптимизация кэша вершин и перерисовки, автоматические цепочки LOD.",
            ),
            (
                "Сжатие текстур",
                "Блочно-сжатые текстуры создаются при импорте.",
            ),
        ],
    },
    Section {
        title: "Среда выполнения",
        items: &[
            (
                "Граф задач",
                "Загрузка и обработка описываются зависимыми задачами в пуле потоков.",
            ),
            (
                "Математика на SIMD",
                "Векторы, матрицы и кватернионы на SSE и AVX.",
            ),
        ],
    },
];

pub fn render(data: &PageData<'_>) -> Markup {
    let (heading, sections) = match data.lang {
        Language::English => ("Features", EN),
        Language::Russian => ("Возможности", RU),
    };

    html! {
        h1 { (heading) }
        @for section in sections {
            section.feature-section {
                h2 { (section.title) }
                ul.feature-list {
                    @for (name, text) in section.items {
                        li {
                            strong { (name) }
                            ": "
                            (text)
                        }
                    }
                }
            }
        }
    }
}
