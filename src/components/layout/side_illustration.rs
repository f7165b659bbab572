use crate::app_lib::build_info;
use leptos::prelude::*;

#[component]
pub fn SideIllustration() -> impl IntoView {
    let version = build_info::version_label();

    view! {
        <aside class="hidden md:block h-full relative">
            <div class="w-full h-full">
                <img
                    src="/background.jpeg"
                    alt="grainy background - EduReach"
                    class="object-cover w-full h-full"
                />
            </div>
            <div class="w-4/5 lg:w-3/4 absolute flex flex-col items-start justify-center top-10 lg:top-20 gap-10 lg:gap-20 left-10 lg:left-12">
                <img src="/logo.png" alt="EduReach logo" />
                <div class="flex flex-col items-start justify-center space-y-7 text-white">
                    <h1 class="text-3xl lg:text-5xl font-bold">
                        "Experience a new Learning Journey"
                    </h1>
                    <p class="text-base lg:text-lg">
                        "Unlock endless opportunities with expert-led courses, interactive learning, and career-boosting skills - all in one place."
                    </p>
                </div>
                <figure class="bg-[#FFC2B2] p-4 lg:p-6 rounded-xl space-y-2 lg:space-y-3 text-black">
                    <blockquote>
                        "EduReach transformed my career! The structured courses and real-world projects gave me the confidence and skills to land my dream job. I went from a beginner to a professional in just few months!"
                    </blockquote>
                    <figcaption class="flex flex-row items-center justify-start gap-4">
                        <img
                            src="/ariana-grande.png"
                            alt=""
                            class="w-12 h-auto rounded-full object-cover"
                        />
                        <div class="space-y-0.5">
                            <h4 class="text-sm font-bold">"Ariana Grande"</h4>
                            <p class="text-xs">"Visual Designer, Google"</p>
                        </div>
                    </figcaption>
                </figure>
            </div>
            <p class="absolute bottom-3 left-10 lg:left-12 text-xs text-white/60">{version}</p>
        </aside>
    }
}
