use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="mt-20">
            <h2 class="text-2xl font-bold section-content">"About Me"</h2>
            <div class="mt-6 grid md:grid-cols-3 gap-6">
                <div class="md:col-span-2 bg-black/30 border border-white/5 rounded-xl p-6">
                    <p class="text-slate-300">
                        "Hello — I'm Iftekhar, a Computer Science student focused on web development and machine learning. I enjoy problem-solving, optimizing systems, and designing responsive user interfaces. I believe in continuous learning and enjoy collaborating on open-source projects."
                    </p>

                    <ul class="mt-4 grid sm:grid-cols-2 gap-3 text-sm text-slate-300">
                        <li>"• Currently learning transformer models and deployment"</li>
                        <li>"• Interested in full-stack development and scalable systems"</li>
                        <li>"• Keen on UI/UX and design systems"</li>
                        <li>"• Goal: build impactful products that help people"</li>
                    </ul>
                </div>

                <div class="bg-gradient-to-tr from-purple-700/30 to-pink-600/20 rounded-xl p-6 border border-white/5">
                    <h3 class="font-semibold">"Quick highlights"</h3>
                    <div class="mt-4 space-y-3 text-slate-200 text-sm">
                        <div>
                            <div class="text-xs text-slate-400">"Education"</div>
                            <div>"B.Sc. in Computer Science (in progress)"</div>
                        </div>
                        <div>
                            <div class="text-xs text-slate-400">"Interests"</div>
                            <div>"AI/ML, Web Apps, Open Source, Design"</div>
                        </div>
                        <div>
                            <div class="text-xs text-slate-400">"Availability"</div>
                            <div>"Freelance & Collaboration"</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
