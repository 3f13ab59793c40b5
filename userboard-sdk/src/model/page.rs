use yew::AttrValue;
use yew_router::Routable;

// 路由
#[derive(Clone, PartialEq, Routable)]
pub enum Page {
    #[at("/")]
    Home,
    #[at("/:flavor")]
    Backend { flavor: AttrValue },
}
