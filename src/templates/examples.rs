use crate::naming::dynamic_href;
use crate::types::{Language, PageData};
use maud::{Markup, html};

struct Example {
    title_en: &'static str,
    title_ru: &'static str,
    text_en: &'static str,
    text_ru: &'static str,
    /// Subproject page the example is built on.
    route: &'static str,
    code: &'static str,
}

const EXAMPLES: [Example; 3] = [
    Example {
        title_en: "Loading a model",
        title_ru: "Загрузка модели",
        text_en: "Import a glTF file and hand the result to the renderer.",
        text_ru: "Импорт файла glTF и передача результата рендереру.",
        route: "/subprojects/mr-importer",
        code: r#"#include <mr-importer/importer.hpp>
#include <mr-graphics/renderer.hpp>

int main() {
  mr::Renderer renderer;
  auto asset = mr::import("models/helmet.glb");
  if (!asset) {
    return 1;
  }
  renderer.add(std::move(*asset));
  renderer.run();
}"#,
    },
    Example {
        title_en: "Building a task graph",
        title_ru: "Построение графа задач",
        text_en: "Chain dependent jobs; each runs as soon as its inputs are ready.",
        text_ru: "Цепочка зависимых задач: каждая запускается, как только готовы её входные данные.",
        route: "/subprojects/mr-contractor",
        code: r#"#include <mr-contractor/graph.hpp>

auto graph = mr::Graph()
  .then([](std::string path) { return read_file(path); })
  .then([](Bytes bytes) { return parse_mesh(bytes); })
  .then([](Mesh mesh) { return optimize(mesh); });

Mesh mesh = graph.execute("models/helmet.glb").get();"#,
    },
    Example {
        title_en: "Transforming vectors",
        title_ru: "Преобразование векторов",
        text_en: "Compose a rotation and a translation with SIMD-backed types.",
        text_ru: "Композиция поворота и переноса на типах с поддержкой SIMD.",
        route: "/subprojects/mr-math",
        code: r#"#include <mr-math/math.hpp>

mr::Matr4f model = mr::Matr4f::rotate(mr::Norm3f(0, 1, 0), mr::Radiansf(0.5f))
                 * mr::Matr4f::translate(mr::Vec3f(0, 0, -5));
mr::Vec3f world = mr::Vec3f(1, 2, 3) * model;"#,
    },
];

pub fn render(data: &PageData<'_>) -> Markup {
    let lang = data.lang;
    let (heading, lead, more) = match lang {
        Language::English => (
            "Examples",
            "Short programs showing how the libraries fit together.",
            "More about",
        ),
        Language::Russian => (
            "Примеры",
            "Небольшие программы, показывающие, как библиотеки работают вместе.",
            "Подробнее о",
        ),
    };

    html! {
        h1 { (heading) }
        p.lead { (lead) }
        @for example in &EXAMPLES {
            @let name = example.route.rsplit('/').next().unwrap_or(example.route);
            section.example {
                @if lang.is_primary() {
                    h2 { (example.title_en) }
                    p { (example.text_en) }
                } @else {
                    h2 { (example.title_ru) }
                    p { (example.text_ru) }
                }
                pre { code.language-cpp { (example.code) } }
                p.example-link {
                    (more) " "
                    a href=(dynamic_href(example.route, lang)) { code { (name) } }
                }
            }
        }
    }
}
