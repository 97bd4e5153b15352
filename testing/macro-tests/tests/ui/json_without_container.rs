use metafold::Marshal;

#[derive(Default, Marshal)]
#[marshal(profiles(json))]
pub struct JsonOnly {
    pub name: Option<String>,
}

fn main() {}
