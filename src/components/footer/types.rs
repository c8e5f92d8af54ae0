pub struct FooterItem<'a> {
    pub key: &'a str,
    pub desc: &'static str,
    pub highlighted: bool,
}

pub struct FooterGroup<'a> {
    pub name: &'static str,
    pub items: Vec<FooterItem<'a>>,
}

impl<'a> FooterItem<'a> {
    pub fn new(key: &'a str, desc: &'static str) -> Self {
        Self {
            key,
            desc,
            highlighted: false,
        }
    }
}
