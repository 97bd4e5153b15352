use metafold::Marshal;

#[derive(Default, Marshal)]
pub struct Duplicate {
    #[marshal(offset(group = "api", path = "a"), offset(group = "api", path = "b"))]
    pub name: Option<String>,
}

fn main() {}
