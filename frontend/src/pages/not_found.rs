use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="flex h-screen w-full flex-col items-center justify-center">
            <h1 class="text-4xl font-bold text-gray-900 mb-2">{"404"}</h1>
            <p class="text-gray-500">{"The page you're looking for doesn't exist."}</p>
        </div>
    }
}
