//! The built-in design-workflow checklist
//!
//! Static fixture: five phases from concept to client approval. Items are
//! created incomplete; only [`crate::Checklist::toggle_item`] and the
//! external-project pre-marking ever change them.

use crate::checklist::{Checklist, ChecklistItem, ChecklistPhase, ChecklistSection};
use crate::checklist::Priority::{Critical, High, Medium};

/// Build the default workflow checklist
#[must_use]
pub fn design_workflow_checklist() -> Checklist {
    Checklist::new(vec![
        concept_phase(),
        detailed_phase(),
        visualization_phase(),
        documentation_phase(),
        approval_phase(),
    ])
}

fn concept_phase() -> ChecklistPhase {
    ChecklistPhase::new(
        "concept",
        "Concept Design",
        "Initial design exploration and client alignment",
        vec![
            ChecklistSection::new(
                "Requirements Analysis",
                vec![
                    ChecklistItem::new("Review client requirements file", Critical)
                        .describe("Load and analyze the generated requirements JSON")
                        .deliverable("Requirements summary document"),
                    ChecklistItem::new("Site measurements verification", Critical)
                        .describe("Visit site or verify provided floor plan measurements")
                        .deliverable("Verified measurements document")
                        .warn("Inaccurate measurements will cause installation issues"),
                    ChecklistItem::new("Photo documentation", High)
                        .describe("Take photos of existing space from all angles")
                        .deliverable("Photo documentation folder"),
                    ChecklistItem::new("Utilities mapping", Critical)
                        .describe("Mark all electrical, plumbing, and gas connection points")
                        .deliverable("Utilities map overlay"),
                ],
            ),
            ChecklistSection::new(
                "Space Planning",
                vec![
                    ChecklistItem::new("Create zone layout", Critical)
                        .describe("Define cooking, prep, storage, and other zones based on requirements")
                        .deliverable("Zone layout diagram"),
                    ChecklistItem::new("Work triangle validation", High)
                        .describe("Ensure optimal distances between sink, hob, and refrigerator")
                        .deliverable("Work triangle diagram"),
                    ChecklistItem::new("Traffic flow analysis", High)
                        .describe("Verify minimum 900mm clearances and movement paths"),
                    ChecklistItem::new("Appliance placement", Critical)
                        .describe("Position all appliances with proper clearances")
                        .deliverable("Appliance layout plan"),
                ],
            ),
            ChecklistSection::new(
                "Initial Concepts",
                vec![
                    ChecklistItem::new("Create 3 design concepts", Critical)
                        .describe("Develop Option A, B, and C with different styles")
                        .deliverable("3 concept presentations"),
                    ChecklistItem::new("Mood boards", High)
                        .describe("Create material, color, and finish mood boards for each option")
                        .deliverable("3 mood boards"),
                    ChecklistItem::new("Preliminary cost estimates", High)
                        .describe("Calculate rough budgets for each concept")
                        .deliverable("Cost comparison sheet"),
                    ChecklistItem::new("Client presentation", Critical)
                        .describe("Present all 3 concepts and gather feedback")
                        .deliverable("Presentation deck"),
                ],
            ),
        ],
    )
}

fn detailed_phase() -> ChecklistPhase {
    ChecklistPhase::new(
        "detailed",
        "Detailed Design",
        "Develop selected concept into complete specifications",
        vec![
            ChecklistSection::new(
                "3D Planner Modeling",
                vec![
                    ChecklistItem::new("Create new planner project", Critical)
                        .describe("Set up project with exact measurements")
                        .planner("New Project → Interior Design → Set dimensions"),
                    ChecklistItem::new("Import floor plan", Critical)
                        .describe("Upload and scale floor plan image")
                        .planner("Floor Plan → Upload Image → Scale to known dimension"),
                    ChecklistItem::new("Place all base cabinets", Critical)
                        .describe("Add all base cabinets with exact dimensions")
                        .planner("Furniture → Kitchen & Bath → Base Cabinets")
                        .deliverable("Base cabinet layout"),
                    ChecklistItem::new("Place all wall cabinets", Critical)
                        .describe("Add wall cabinets at correct heights (2220mm from floor)")
                        .planner("Furniture → Kitchen & Bath → Wall Cabinets"),
                    ChecklistItem::new("Place all tall units", High)
                        .describe("Add tall units with 150mm toe kick")
                        .planner("Furniture → Kitchen & Bath → Tall Cabinets"),
                    ChecklistItem::new("Add countertop", Critical)
                        .describe("Apply countertop material with cutouts")
                        .planner("Kitchen & Bath → Countertop → Custom Cutout for sink/hob"),
                    ChecklistItem::new("Add backsplash", High)
                        .describe("Apply tile/material to backsplash area (600mm height)")
                        .planner("Materials → Wall Tile → Apply to section"),
                    ChecklistItem::new("Place appliances", Critical)
                        .describe("Add sink, hob, chimney, and other appliances")
                        .planner("Furniture → Kitchen & Bath → Appliances"),
                    ChecklistItem::new("Apply materials and finishes", High)
                        .describe("Set cabinet finishes, countertop, and hardware")
                        .planner("Material & Component → Edit Material"),
                    ChecklistItem::new("Add lighting", Medium)
                        .describe("Place under-cabinet LEDs, ceiling lights")
                        .planner("Images/Videos & Light → Add Light Sources"),
                ],
            ),
            ChecklistSection::new(
                "Hardware Specification",
                vec![
                    ChecklistItem::new("Select Hafele hinges", Critical)
                        .describe("Specify hinge type and quantity for each cabinet")
                        .deliverable("Hafele hardware schedule"),
                    ChecklistItem::new("Select drawer systems", Critical)
                        .describe("Choose Tandem Box or other systems with exact lengths"),
                    ChecklistItem::new("Specify internal fittings", High)
                        .describe("Pull-outs, organizers, corner solutions"),
                    ChecklistItem::new("Create hardware schedule", Critical)
                        .describe("List all hardware with Hafele article numbers")
                        .deliverable("Complete hardware list Excel"),
                ],
            ),
            ChecklistSection::new(
                "Technical Documentation",
                vec![
                    ChecklistItem::new("Generate construction drawings", Critical)
                        .describe("Export construction drawings from the planner")
                        .planner("Drawings & Schedules → Construction Drawings → Kitchen & Bath")
                        .deliverable("Construction drawings PDF"),
                    ChecklistItem::new("Generate cut list", Critical)
                        .describe("Export material schedule/cut list")
                        .planner("Construction Drawings → Material Schedule → Download Excel")
                        .deliverable("Cut list Excel"),
                    ChecklistItem::new("Create zone-specific drawings", High)
                        .describe("Export separate drawings for each zone")
                        .deliverable("Zone A, B, C drawings"),
                    ChecklistItem::new("Generate cabinet detail drawings", Critical)
                        .describe("Part-level drawings for manufacturing")
                        .planner("Select \"Part\" mode → Generate drawings")
                        .deliverable("Part drawings for each cabinet"),
                ],
            ),
        ],
    )
}

fn visualization_phase() -> ChecklistPhase {
    ChecklistPhase::new(
        "visualization",
        "Visualization",
        "Create high-quality renders for client approval",
        vec![
            ChecklistSection::new(
                "Render Setup",
                vec![
                    ChecklistItem::new("Set up lighting", High)
                        .describe("Add daylight, under-cabinet LEDs, ambient lighting")
                        .planner("Images/Videos & Light → Adjust lighting"),
                    ChecklistItem::new("Save camera views", High)
                        .describe("Create and save 5-7 camera angles")
                        .planner("Save View → Name each angle"),
                    ChecklistItem::new("Render settings optimization", Medium)
                        .describe("Set 4K resolution, High/Ultra quality"),
                ],
            ),
            ChecklistSection::new(
                "Image Generation",
                vec![
                    ChecklistItem::new("Full kitchen overview render", Critical)
                        .describe("Isometric view showing entire kitchen")
                        .planner("Render Image → 4K → High Quality")
                        .deliverable("Full kitchen 4K render"),
                    ChecklistItem::new("Zone A render", Critical)
                        .describe("Detailed view of main cooking area")
                        .deliverable("Zone A 4K render"),
                    ChecklistItem::new("Zone B render", High)
                        .describe("Storage/pantry area view")
                        .deliverable("Zone B 4K render"),
                    ChecklistItem::new("Zone C render", High)
                        .describe("Breakfast counter/dining area")
                        .deliverable("Zone C 4K render"),
                    ChecklistItem::new("Detail shots", Medium)
                        .describe("Close-ups of hardware, finishes, special features")
                        .deliverable("3-5 detail renders"),
                ],
            ),
            ChecklistSection::new(
                "Virtual Tour",
                vec![
                    ChecklistItem::new("Create 360° tour", High)
                        .describe("Set panorama points and generate tour")
                        .planner("Panorama → Place points → Generate tour")
                        .deliverable("Shareable 360° tour link"),
                    ChecklistItem::new("Test embed functionality", Medium)
                        .describe("Verify tour works on website"),
                ],
            ),
        ],
    )
}

fn documentation_phase() -> ChecklistPhase {
    ChecklistPhase::new(
        "documentation",
        "Documentation",
        "Compile all deliverables for manufacturing",
        vec![
            ChecklistSection::new(
                "BOQ Preparation",
                vec![
                    ChecklistItem::new("Calculate material quantities", Critical)
                        .describe("From cut list, calculate total plywood, laminate, etc.")
                        .deliverable("Material quantities Excel"),
                    ChecklistItem::new("Price all materials", Critical)
                        .describe("Get current rates for all materials"),
                    ChecklistItem::new("Price all hardware", Critical)
                        .describe("Get Hafele pricing for all items"),
                    ChecklistItem::new("Calculate labor costs", Critical)
                        .describe("Estimate carpentry, plumbing, electrical, tiling"),
                    ChecklistItem::new("Create final BOQ", Critical)
                        .describe("Comprehensive BOQ with all line items")
                        .deliverable("Final BOQ Excel/PDF"),
                ],
            ),
            ChecklistSection::new(
                "Client Package",
                vec![
                    ChecklistItem::new("Create presentation deck", Critical)
                        .describe("20-30 page PDF with renders, specs, costs")
                        .deliverable("Client presentation PDF"),
                    ChecklistItem::new("Material samples selection", High)
                        .describe("Provide physical samples for approval"),
                    ChecklistItem::new("Schedule client meeting", Critical)
                        .describe("Book presentation and Q&A session"),
                ],
            ),
            ChecklistSection::new(
                "Manufacturing Package",
                vec![
                    ChecklistItem::new("Organize all drawings", Critical)
                        .describe("Folder structure with all PDFs and CADs")
                        .deliverable("Complete drawings folder"),
                    ChecklistItem::new("Hardware procurement list", Critical)
                        .describe("Excel with Hafele order details")
                        .deliverable("Hardware purchase order"),
                    ChecklistItem::new("Material procurement list", Critical)
                        .describe("Plywood, laminate, countertop orders")
                        .deliverable("Material purchase orders"),
                    ChecklistItem::new("Assembly instructions", High)
                        .describe("Step-by-step guide for carpenters")
                        .deliverable("Assembly manual"),
                ],
            ),
        ],
    )
}

fn approval_phase() -> ChecklistPhase {
    ChecklistPhase::new(
        "approval",
        "Client Approval",
        "Present design and obtain sign-off",
        vec![
            ChecklistSection::new(
                "Presentation",
                vec![
                    ChecklistItem::new("Present design to client", Critical)
                        .describe("Walk through all renders, specifications, and costs"),
                    ChecklistItem::new("Address feedback", Critical)
                        .describe("Document all client comments and concerns")
                        .deliverable("Feedback log"),
                    ChecklistItem::new("Make revisions", High)
                        .describe("Implement approved changes"),
                ],
            ),
            ChecklistSection::new(
                "Final Approval",
                vec![
                    ChecklistItem::new("Get design sign-off", Critical)
                        .describe("Obtain written approval on final design")
                        .deliverable("Signed approval document"),
                    ChecklistItem::new("Get BOQ approval", Critical)
                        .describe("Client approves budget and payment terms")
                        .deliverable("Signed BOQ"),
                    ChecklistItem::new("Collect advance payment", Critical)
                        .describe("Receive initial payment (typically 40-50%)")
                        .deliverable("Payment receipt"),
                    ChecklistItem::new("Finalize timeline", Critical)
                        .describe("Agree on project milestones and completion date")
                        .deliverable("Project timeline document"),
                ],
            ),
        ],
    )
}
